//! Store trait definitions

use tracing::warn;

use crate::{ScheduleEntry, StoreResult, UserProfile};

/// Storage key for the serialized user profile
pub const USER_PROFILE_KEY: &str = "conference-user";

/// Storage key for the serialized personal schedule list
pub const SCHEDULE_KEY: &str = "conference-schedule";

/// On-device key-value persistence port.
///
/// Implementations store opaque string blobs under fixed keys; the typed
/// helpers layer JSON serialization of the two logical records on top.
/// A blob that fails to deserialize reads as absent (with a warning)
/// rather than as an error.
pub trait Store: Send + Sync {
    /// Get the blob stored under a key, if any
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store a blob under a key, replacing any prior value
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove a key; not an error if absent
    fn remove(&self, key: &str) -> StoreResult<()>;

    // Typed records

    /// Load the user profile; absent if never registered or unreadable
    fn load_profile(&self) -> StoreResult<Option<UserProfile>> {
        let Some(json) = self.get(USER_PROFILE_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str(&json) {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => {
                warn!(key = USER_PROFILE_KEY, error = %e, "Stored profile unreadable, treating as absent");
                Ok(None)
            }
        }
    }

    /// Overwrite the user profile
    fn save_profile(&self, profile: &UserProfile) -> StoreResult<()> {
        let json = serde_json::to_string(profile)?;
        self.set(USER_PROFILE_KEY, &json)
    }

    /// Load the personal schedule; absent key or unreadable blob reads
    /// as the empty list
    fn load_schedule(&self) -> StoreResult<Vec<ScheduleEntry>> {
        let Some(json) = self.get(SCHEDULE_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&json) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(key = SCHEDULE_KEY, error = %e, "Stored schedule unreadable, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Overwrite the full personal schedule list
    fn save_schedule(&self, entries: &[ScheduleEntry]) -> StoreResult<()> {
        let json = serde_json::to_string(entries)?;
        self.set(SCHEDULE_KEY, &json)
    }

    /// Delete the personal schedule entirely; idempotent
    fn clear_schedule(&self) -> StoreResult<()> {
        self.remove(SCHEDULE_KEY)
    }

    /// Check if the store is healthy
    fn is_healthy(&self) -> bool;
}
