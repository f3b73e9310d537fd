//! Persisted record types
//!
//! Field names in the serialized JSON are camelCase to match the
//! on-device format documented for the two storage keys.

use chrono::{DateTime, Local};
use confmate_catalog::SessionRecord;
use confmate_util::{ParticipantId, SessionId};
use serde::{Deserialize, Serialize};

/// The registered user's profile. A single record per device,
/// overwritten on every successful registration update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub organization: String,
    pub bio: String,

    /// Instant of the last profile write
    pub registration_date: DateTime<Local>,

    /// Regenerated on every successful submit
    pub participant_id: ParticipantId,
}

/// One session in the personal schedule: the catalog record plus
/// scheduling metadata. Never mutated in place; removal and re-add
/// replace it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    #[serde(flatten)]
    pub session: SessionRecord,

    /// Absolute start instant as epoch millis, derived at add time from
    /// the session's day date and start time
    pub timestamp: i64,

    /// Instant the entry was added
    pub date_added: DateTime<Local>,
}

impl ScheduleEntry {
    pub fn id(&self) -> &SessionId {
        &self.session.id
    }

    /// Whether the session's start is at or before the given instant
    pub fn is_past(&self, now_millis: i64) -> bool {
        self.timestamp <= now_millis
    }
}
