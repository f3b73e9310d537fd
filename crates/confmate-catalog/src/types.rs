//! Catalog record types

use confmate_util::SessionId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Session type tag, used only for display color-coding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionType {
    Keynote,
    Panel,
    Workshop,
    Break,
    #[serde(rename = "Lightning Talk")]
    LightningTalk,
    #[serde(rename = "Light Talk")]
    LightTalk,
    #[serde(rename = "Expert Talk")]
    ExpertTalk,
    #[serde(rename = "Expert Session")]
    ExpertSession,
    Showcase,
    #[serde(rename = "Special Event")]
    SpecialEvent,
    Opening,
    Closing,
    Conversation,
}

impl SessionType {
    /// Display label, matching the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            SessionType::Keynote => "Keynote",
            SessionType::Panel => "Panel",
            SessionType::Workshop => "Workshop",
            SessionType::Break => "Break",
            SessionType::LightningTalk => "Lightning Talk",
            SessionType::LightTalk => "Light Talk",
            SessionType::ExpertTalk => "Expert Talk",
            SessionType::ExpertSession => "Expert Session",
            SessionType::Showcase => "Showcase",
            SessionType::SpecialEvent => "Special Event",
            SessionType::Opening => "Opening",
            SessionType::Closing => "Closing",
            SessionType::Conversation => "Conversation",
        }
    }

    /// Fixed display color for this session type
    pub fn color(&self) -> &'static str {
        match self {
            SessionType::Keynote | SessionType::Opening | SessionType::Closing => "#1a237e",
            SessionType::Panel => "#3949ab",
            SessionType::Workshop => "#00bcd4",
            SessionType::LightningTalk | SessionType::LightTalk => "#ff9800",
            SessionType::ExpertTalk | SessionType::ExpertSession => "#9c27b0",
            SessionType::Showcase => "#4caf50",
            SessionType::SpecialEvent => "#e91e63",
            SessionType::Break => "#757575",
            SessionType::Conversation => "#ff5722",
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single catalog session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: SessionId,

    /// Display time range "<start> - <end>" in local venue time, no date
    pub time: String,

    pub title: String,
    pub speaker: String,

    /// Duration in minutes
    pub duration: u32,

    pub venue: String,

    #[serde(rename = "type")]
    pub kind: SessionType,
}

/// A conference day: date, theme, and its ordered sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Day {
    /// Display date, e.g. "August 20, 2025"
    pub date: String,
    pub theme: String,
    pub description: String,
    pub sessions: Vec<SessionRecord>,
}

/// Day summary without the session list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayInfo {
    pub date: String,
    pub theme: String,
    pub description: String,
}

impl Day {
    pub fn info(&self) -> DayInfo {
        DayInfo {
            date: self.date.clone(),
            theme: self.theme.clone(),
            description: self.description.clone(),
        }
    }
}

/// Identifier for one of the three conference days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayId {
    Day1,
    Day2,
    Day3,
}

impl DayId {
    pub const ALL: [DayId; 3] = [DayId::Day1, DayId::Day2, DayId::Day3];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayId::Day1 => "day1",
            DayId::Day2 => "day2",
            DayId::Day3 => "day3",
        }
    }
}

impl fmt::Display for DayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error)]
#[error("Unknown day: {0} (expected day1, day2, or day3)")]
pub struct ParseDayIdError(String);

impl FromStr for DayId {
    type Err = ParseDayIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day1" | "1" => Ok(DayId::Day1),
            "day2" | "2" => Ok(DayId::Day2),
            "day3" | "3" => Ok(DayId::Day3),
            other => Err(ParseDayIdError(other.to_string())),
        }
    }
}

/// Top-level conference metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConferenceInfo {
    pub title: String,
    pub subtitle: String,
    pub location: String,
    pub dates: String,
    pub tagline: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_type_serializes_as_display_string() {
        let json = serde_json::to_string(&SessionType::LightningTalk).unwrap();
        assert_eq!(json, "\"Lightning Talk\"");

        let parsed: SessionType = serde_json::from_str("\"Expert Session\"").unwrap();
        assert_eq!(parsed, SessionType::ExpertSession);
    }

    #[test]
    fn session_type_colors() {
        assert_eq!(SessionType::Keynote.color(), "#1a237e");
        assert_eq!(SessionType::Opening.color(), SessionType::Closing.color());
        assert_eq!(SessionType::Break.color(), "#757575");
    }

    #[test]
    fn session_record_kind_serializes_as_type() {
        let record = SessionRecord {
            id: SessionId::new("opening-day1"),
            time: "9:00 AM - 9:15 AM".into(),
            title: "Welcoming and Opening Remarks".into(),
            speaker: "Rebecca Ryakitimbo".into(),
            duration: 15,
            venue: "Main Hall".into(),
            kind: SessionType::Opening,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"type\":\"Opening\""));

        let parsed: SessionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn day_id_parsing() {
        assert_eq!("day1".parse::<DayId>().unwrap(), DayId::Day1);
        assert_eq!("DAY2".parse::<DayId>().unwrap(), DayId::Day2);
        assert_eq!("3".parse::<DayId>().unwrap(), DayId::Day3);
        assert!("day4".parse::<DayId>().is_err());
    }
}
