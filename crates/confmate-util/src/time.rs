//! Time utilities for confmate
//!
//! Provides the wall-clock used for countdowns and registration stamps,
//! parsing of catalog session times into absolute instants, and the
//! human-readable countdown label.
//!
//! # Mock Time for Development
//!
//! In debug builds, the `CONFMATE_MOCK_TIME` environment variable can be
//! set to override the system time, which makes countdowns and the
//! next-event banner reproducible outside the conference dates.
//!
//! Format: `YYYY-MM-DD HH:MM:SS` (e.g., `2025-08-20 08:30:00`)

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use std::sync::OnceLock;

use crate::{CompanionError, Result};

/// Environment variable name for mock time (debug builds only)
pub const MOCK_TIME_ENV_VAR: &str = "CONFMATE_MOCK_TIME";

/// Format of a catalog day date plus a session start time,
/// e.g. "August 20, 2025 9:00 AM"
pub const SESSION_TIME_FORMAT: &str = "%B %d, %Y %I:%M %p";

/// Label shown when an entry's start time is already behind us
pub const EVENT_PASSED_LABEL: &str = "Event has passed";

/// Cached mock time offset from the real time when the process started.
/// This allows mock time to advance naturally.
static MOCK_TIME_OFFSET: OnceLock<Option<chrono::Duration>> = OnceLock::new();

fn get_mock_time_offset() -> Option<chrono::Duration> {
    *MOCK_TIME_OFFSET.get_or_init(|| {
        #[cfg(debug_assertions)]
        {
            if let Ok(mock_time_str) = std::env::var(MOCK_TIME_ENV_VAR) {
                match NaiveDateTime::parse_from_str(&mock_time_str, "%Y-%m-%d %H:%M:%S")
                    .ok()
                    .and_then(|naive| Local.from_local_datetime(&naive).single())
                {
                    Some(mock_dt) => {
                        let offset = mock_dt.signed_duration_since(Local::now());
                        tracing::info!(
                            mock_time = %mock_time_str,
                            offset_secs = offset.num_seconds(),
                            "Mock time enabled"
                        );
                        return Some(offset);
                    }
                    None => {
                        tracing::warn!(
                            mock_time = %mock_time_str,
                            expected_format = "%Y-%m-%d %H:%M:%S",
                            "Invalid mock time, ignoring"
                        );
                    }
                }
            }
            None
        }
        #[cfg(not(debug_assertions))]
        {
            None
        }
    })
}

/// Get the current local time, respecting mock time settings in debug builds.
///
/// In release builds this always returns the real system time. In debug
/// builds, if `CONFMATE_MOCK_TIME` is set, the returned time advances from
/// the mock instant at the same rate as real time.
pub fn now() -> DateTime<Local> {
    let real_now = Local::now();

    if let Some(offset) = get_mock_time_offset() {
        real_now + offset
    } else {
        real_now
    }
}

/// Parse a session's start instant from its catalog day date and time range.
///
/// `time_range` is the catalog display string "<start> - <end>"; only the
/// start component is used. The combined value must match
/// [`SESSION_TIME_FORMAT`] exactly; malformed strings fail with
/// [`CompanionError::TimeParse`] rather than producing a bogus instant.
pub fn parse_session_start(day_date: &str, time_range: &str) -> Result<DateTime<Local>> {
    let start = time_range
        .split(" - ")
        .next()
        .unwrap_or(time_range)
        .trim();
    let combined = format!("{} {}", day_date, start);

    let naive = NaiveDateTime::parse_from_str(&combined, SESSION_TIME_FORMAT)
        .map_err(|e| CompanionError::time_parse(&combined, e.to_string()))?;

    Local
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| {
            CompanionError::time_parse(&combined, "ambiguous or nonexistent local time")
        })
}

/// Render the time remaining until `target_millis` as a countdown label.
///
/// Past or current instants render as [`EVENT_PASSED_LABEL`]. Future
/// instants decompose the remaining milliseconds into whole days, hours
/// and minutes by floor division and render the coarsest populated units:
/// "Xd Yh Zm", "Xh Ym", or "Zm".
pub fn format_time_until(target_millis: i64, now_millis: i64) -> String {
    let remaining = target_millis - now_millis;
    if remaining <= 0 {
        return EVENT_PASSED_LABEL.to_string();
    }

    let days = remaining / 86_400_000;
    let hours = (remaining % 86_400_000) / 3_600_000;
    let minutes = (remaining % 3_600_000) / 60_000;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}
