//! Personal schedule manager
//!
//! Owns the persisted schedule list: add with duplicate rejection and a
//! registration gate, idempotent remove/clear, the next-upcoming lookup,
//! and countdown labels. The stored order is insertion order; sorting by
//! start time happens only for display.

use chrono::{DateTime, Local};
use confmate_catalog::SessionRecord;
use confmate_store::{ScheduleEntry, Store};
use confmate_util::{CompanionError, Result, SessionId, format_time_until, parse_session_start};
use std::sync::Arc;
use tracing::{debug, info};

/// Manages the persisted personal schedule
pub struct ScheduleManager {
    store: Arc<dyn Store>,
}

impl ScheduleManager {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// All entries in stored (insertion) order
    pub fn list(&self) -> Result<Vec<ScheduleEntry>> {
        self.store
            .load_schedule()
            .map_err(|e| CompanionError::storage(e.to_string()))
    }

    /// Whether the schedule has an entry for this session
    pub fn contains(&self, id: &SessionId) -> Result<bool> {
        Ok(self.list()?.iter().any(|e| e.id() == id))
    }

    /// Add a catalog session to the schedule.
    ///
    /// Requires an existing registration, rejects duplicates as a no-op,
    /// and derives the absolute start instant from `day_date` plus the
    /// session's start time. A malformed time string fails before
    /// anything is persisted.
    pub fn add(
        &self,
        session: &SessionRecord,
        day_date: &str,
        now: DateTime<Local>,
    ) -> Result<ScheduleEntry> {
        let registered = self
            .store
            .load_profile()
            .map_err(|e| CompanionError::storage(e.to_string()))?
            .is_some();
        if !registered {
            return Err(CompanionError::NotRegistered);
        }

        let mut entries = self.list()?;
        if entries.iter().any(|e| e.id() == &session.id) {
            return Err(CompanionError::AlreadyScheduled(session.id.clone()));
        }

        let start = parse_session_start(day_date, &session.time)?;

        let entry = ScheduleEntry {
            session: session.clone(),
            timestamp: start.timestamp_millis(),
            date_added: now,
        };

        entries.push(entry.clone());
        self.store
            .save_schedule(&entries)
            .map_err(|e| CompanionError::storage(e.to_string()))?;

        info!(session_id = %session.id, start = %start, "Session added to schedule");
        Ok(entry)
    }

    /// Remove a session by ID; no error if it is not scheduled
    pub fn remove(&self, id: &SessionId) -> Result<()> {
        let mut entries = self.list()?;
        let before = entries.len();
        entries.retain(|e| e.id() != id);

        self.store
            .save_schedule(&entries)
            .map_err(|e| CompanionError::storage(e.to_string()))?;

        debug!(session_id = %id, removed = before != entries.len(), "Remove processed");
        Ok(())
    }

    /// Delete the entire schedule; idempotent
    pub fn clear(&self) -> Result<()> {
        self.store
            .clear_schedule()
            .map_err(|e| CompanionError::storage(e.to_string()))?;
        info!("Schedule cleared");
        Ok(())
    }

    /// The chronologically next entry strictly after `now_millis`.
    ///
    /// Ties are broken by stored order. Absent when the schedule is
    /// empty or every entry has already started.
    pub fn next_upcoming(&self, now_millis: i64) -> Result<Option<ScheduleEntry>> {
        let entries = self.list()?;
        let next = entries
            .into_iter()
            .filter(|e| e.timestamp > now_millis)
            .fold(None::<ScheduleEntry>, |best, e| match best {
                Some(b) if b.timestamp <= e.timestamp => Some(b),
                _ => Some(e),
            });
        Ok(next)
    }

    /// Entries re-sorted by start time ascending (stable) for the
    /// schedule view; the stored order is untouched.
    pub fn sorted_for_display(&self) -> Result<Vec<ScheduleEntry>> {
        let mut entries = self.list()?;
        entries.sort_by_key(|e| e.timestamp);
        Ok(entries)
    }

    /// Countdown label for an entry at the given instant
    pub fn time_until(entry: &ScheduleEntry, now_millis: i64) -> String {
        format_time_until(entry.timestamp, now_millis)
    }
}
