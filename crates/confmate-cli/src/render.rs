//! Terminal rendering for the confmate views
//!
//! Pure string builders so the output can be asserted on directly. The
//! share text format is fixed; the other views are plain terminal text.

use confmate_catalog::{Catalog, ConferenceInfo, Day, DayId};
use confmate_store::{ScheduleEntry, UserProfile};
use confmate_util::format_time_until;

/// First line of the shareable schedule text
pub const EXPORT_HEADER: &str = "My Gendering AI Conference 2025 Schedule:";

/// Conference banner shown by `confmate info`
pub fn render_info(info: &ConferenceInfo) -> String {
    let mut out = String::new();
    out.push_str(&info.title);
    out.push('\n');
    out.push_str(&info.subtitle);
    out.push('\n');
    out.push('\n');
    out.push_str(&format!("{} | {}\n", info.dates, info.location));
    out.push_str(&info.tagline);
    out.push('\n');
    out
}

/// One day's program: date and theme header, then the ordered sessions
pub fn render_day(day_id: DayId, day: &Day) -> String {
    let mut out = String::new();
    out.push_str(&format!("[{}] {} | {}\n", day_id, day.date, day.theme));
    out.push_str(&format!("{}\n\n", day.description));

    for session in &day.sessions {
        out.push_str(&format!(
            "  {:<22} [{}] {}\n",
            session.time,
            session.kind.label(),
            session.title
        ));
        out.push_str(&format!(
            "  {:<22} {} · {} · {} min · {}\n",
            "",
            session.id,
            session.speaker,
            session.duration,
            session.venue
        ));
    }

    out
}

/// The full agenda or a single day of it
pub fn render_agenda(catalog: &Catalog, day: Option<DayId>) -> String {
    match day {
        Some(id) => render_day(id, catalog.day(id)),
        None => {
            let mut out = String::new();
            for (id, day) in catalog.days() {
                if !out.is_empty() {
                    out.push('\n');
                }
                out.push_str(&render_day(id, day));
            }
            out
        }
    }
}

/// The stored registration, shown by `confmate profile`
pub fn render_profile(profile: &UserProfile) -> String {
    let mut out = String::new();
    out.push_str(&format!("Name:           {}\n", profile.name));
    out.push_str(&format!("Email:          {}\n", profile.email));
    out.push_str(&format!("Organization:   {}\n", profile.organization));
    out.push_str(&format!("Bio:            {}\n", profile.bio));
    out.push_str(&format!("Participant ID: {}\n", profile.participant_id));
    out.push_str(&format!(
        "Registered:     {}\n",
        profile.registration_date.format("%B %d, %Y %I:%M %p")
    ));
    out
}

/// The personal schedule view: an optional next-event banner with a
/// countdown, then the entries sorted by start time. Entries whose start
/// is behind `now_millis` are marked as passed.
pub fn render_schedule(
    sorted: &[ScheduleEntry],
    next: Option<&ScheduleEntry>,
    now_millis: i64,
) -> String {
    if sorted.is_empty() {
        return "Your schedule is empty. Add sessions with `confmate add <session-id>`.\n"
            .to_string();
    }

    let mut out = String::new();

    if let Some(next) = next {
        out.push_str("Next up\n");
        out.push_str(&format!(
            "  {} ({})\n",
            next.session.title, next.session.time
        ));
        out.push_str(&format!(
            "  Starts in: {}\n\n",
            format_time_until(next.timestamp, now_millis)
        ));
    }

    for entry in sorted {
        let marker = if entry.is_past(now_millis) {
            " (passed)"
        } else {
            ""
        };
        out.push_str(&format!(
            "  {:<22} [{}] {}{}\n",
            entry.session.time,
            entry.session.kind.label(),
            entry.session.title,
            marker
        ));
        out.push_str(&format!(
            "  {:<22} {} · {}\n",
            "",
            entry.session.speaker,
            entry.session.venue
        ));
    }

    out
}

/// Shareable plain-text schedule in stored order: a fixed header, then a
/// numbered block per entry with title, time, speaker, and venue.
pub fn export_text(entries: &[ScheduleEntry]) -> String {
    let body = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            format!(
                "{}. {}\n   Time: {}\n   Speaker: {}\n   Venue: {}\n",
                i + 1,
                entry.session.title,
                entry.session.time,
                entry.session.speaker,
                entry.session.venue
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n\n{}", EXPORT_HEADER, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use confmate_catalog::{SessionRecord, SessionType};
    use confmate_util::{EVENT_PASSED_LABEL, SessionId};

    fn entry(id: &str, title: &str, time: &str, timestamp: i64) -> ScheduleEntry {
        ScheduleEntry {
            session: SessionRecord {
                id: SessionId::new(id),
                time: time.into(),
                title: title.into(),
                speaker: "Rebecca Ryakitimbo".into(),
                duration: 15,
                venue: "Main Hall".into(),
                kind: SessionType::Opening,
            },
            timestamp,
            date_added: Local.with_ymd_and_hms(2025, 8, 19, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn export_matches_share_format() {
        let entries = vec![
            entry("opening-day1", "Welcoming and Opening Remarks", "9:00 AM - 9:15 AM", 100),
            entry("keynote-day1", "Keynote Address", "9:15 AM - 9:45 AM", 200),
        ];

        let text = export_text(&entries);
        let expected = "My Gendering AI Conference 2025 Schedule:\n\n\
            1. Welcoming and Opening Remarks\n   \
            Time: 9:00 AM - 9:15 AM\n   \
            Speaker: Rebecca Ryakitimbo\n   \
            Venue: Main Hall\n\n\
            2. Keynote Address\n   \
            Time: 9:15 AM - 9:45 AM\n   \
            Speaker: Rebecca Ryakitimbo\n   \
            Venue: Main Hall\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn export_preserves_given_order() {
        // Caller passes stored order; rendering must not re-sort
        let entries = vec![
            entry("b", "Second Added", "10:00 AM - 11:00 AM", 200),
            entry("a", "First By Time", "9:00 AM - 10:00 AM", 100),
        ];

        let text = export_text(&entries);
        let second = text.find("Second Added").unwrap();
        let first = text.find("First By Time").unwrap();
        assert!(second < first);
    }

    #[test]
    fn schedule_view_marks_passed_and_counts_down() {
        let entries = vec![
            entry("a", "Past Session", "9:00 AM - 9:15 AM", 100),
            entry("b", "Future Session", "10:00 AM - 10:15 AM", 90 * 60_000 + 500),
        ];
        let next = entries[1].clone();

        let text = render_schedule(&entries, Some(&next), 500);
        assert!(text.contains("Past Session (passed)"));
        assert!(text.contains("Future Session"));
        assert!(!text.contains("Future Session (passed)"));
        assert!(text.contains("Starts in: 1h 30m"));
        assert!(!text.contains(EVENT_PASSED_LABEL));
    }

    #[test]
    fn empty_schedule_has_hint() {
        let text = render_schedule(&[], None, 0);
        assert!(text.contains("confmate add"));
    }

    #[test]
    fn agenda_includes_every_day_and_session_ids() {
        let catalog = Catalog::builtin();
        let text = render_agenda(catalog, None);
        assert!(text.contains("August 20, 2025"));
        assert!(text.contains("August 21, 2025"));
        assert!(text.contains("August 22, 2025"));
        assert!(text.contains("opening-day1"));

        let day3 = render_agenda(catalog, Some(DayId::Day3));
        assert!(day3.contains("August 22, 2025"));
        assert!(!day3.contains("August 20, 2025"));
    }

    #[test]
    fn info_banner() {
        let text = render_info(Catalog::builtin().info());
        assert!(text.contains("GENDERING AI CONFERENCE"));
        assert!(text.contains("August 20-22, 2025"));
    }
}
