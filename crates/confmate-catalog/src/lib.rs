//! Static conference catalog for confmate
//!
//! The catalog is an immutable, build-time table of sessions grouped by
//! day. It is a read-only input to the schedule and registration
//! managers; nothing here is persisted or validated at runtime.

mod data;
mod types;

pub use types::*;

use confmate_util::SessionId;
use std::sync::OnceLock;

/// The read-only conference catalog: conference metadata plus the three
/// day programs in chronological order.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(crate) info: ConferenceInfo,
    pub(crate) days: Vec<Day>,
}

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// The built-in catalog shipped with the binary
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(data::build_catalog)
    }

    /// Conference metadata (title, location, dates)
    pub fn info(&self) -> &ConferenceInfo {
        &self.info
    }

    /// All days in chronological order
    pub fn days(&self) -> impl Iterator<Item = (DayId, &Day)> {
        DayId::ALL.into_iter().zip(self.days.iter())
    }

    /// A single day's program
    pub fn day(&self, id: DayId) -> &Day {
        match id {
            DayId::Day1 => &self.days[0],
            DayId::Day2 => &self.days[1],
            DayId::Day3 => &self.days[2],
        }
    }

    /// Ordered sessions for a day
    pub fn sessions_for_day(&self, id: DayId) -> &[SessionRecord] {
        &self.day(id).sessions
    }

    /// Date, theme, and description for a day
    pub fn day_info(&self, id: DayId) -> DayInfo {
        self.day(id).info()
    }

    /// Look up a session by ID, along with the day it belongs to
    pub fn find_session(&self, id: &SessionId) -> Option<(DayId, &Day, &SessionRecord)> {
        self.days().find_map(|(day_id, day)| {
            day.sessions
                .iter()
                .find(|s| &s.id == id)
                .map(|s| (day_id, day, s))
        })
    }
}
