//! Time parsing and period comparison utilities.
//!
//! All times are minutes since midnight (0..=1439). Periods never cross
//! midnight, so a weekday plus two minute offsets fully describes one.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ScheduleError;
use crate::problem::Period;

/// Days of the week, Sunday-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    /// All days in week order.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    /// Position of the day within the week (Sunday = 0).
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DayOfWeek::Sunday => "Sunday",
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
        };
        f.write_str(name)
    }
}

/// Parse a `HH:MM` string into minutes since midnight.
///
/// A trailing seconds field (`HH:MM:SS`) is accepted and ignored. Anything
/// else, or an out-of-range hour or minute, is an `InvalidTimeFormat` error.
pub fn parse_time_to_minutes(text: &str) -> Result<u16, ScheduleError> {
    let invalid = || ScheduleError::InvalidTimeFormat(text.to_string());

    let fields: Vec<&str> = text.split(':').collect();
    if fields.len() != 2 && fields.len() != 3 {
        return Err(invalid());
    }

    let hours: u16 = fields[0].trim().parse().map_err(|_| invalid())?;
    let minutes: u16 = fields[1].trim().parse().map_err(|_| invalid())?;

    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    Ok(hours * 60 + minutes)
}

/// Format minutes since midnight as a `HH:MM` string.
pub fn format_minutes(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Check whether two weekly periods occupy overlapping time.
///
/// Periods on different days never overlap. On the same day the intervals
/// are half-open, so a period ending exactly when another starts does not
/// count as a conflict.
pub fn periods_overlap(a: &Period, b: &Period) -> bool {
    a.day == b.day && a.start < b.end && b.start < a.end
}

/// Serde adapter storing minute-of-day fields as `HH:MM` strings, matching
/// the JSON shape timetable data is exchanged in.
pub mod hhmm {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(minutes: &u16, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_minutes(*minutes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u16, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        super::parse_time_to_minutes(&text).map_err(de::Error::custom)
    }
}
