//! Problem definition and data structures for timetable generation.

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::time::{self, DayOfWeek};

/// A single weekly occurrence of a class or activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// Optional display label, e.g. a room or a note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub day: DayOfWeek,
    /// Start of the period, minutes since midnight.
    #[serde(with = "time::hhmm")]
    pub start: u16,
    /// End of the period, minutes since midnight; always after `start`.
    #[serde(with = "time::hhmm")]
    pub end: u16,
}

impl Period {
    /// Create a period from `HH:MM` strings.
    pub fn new(day: DayOfWeek, start: &str, end: &str) -> Result<Self, ScheduleError> {
        let start = time::parse_time_to_minutes(start)?;
        let end = time::parse_time_to_minutes(end)?;
        if start >= end {
            return Err(ScheduleError::ConfigurationError(format!(
                "period on {} must start before it ends ({} >= {})",
                day,
                time::format_minutes(start),
                time::format_minutes(end)
            )));
        }
        Ok(Period {
            label: None,
            day,
            start,
            end,
        })
    }

    /// Create a period directly from minute offsets.
    pub fn from_minutes(day: DayOfWeek, start: u16, end: u16) -> Self {
        Period {
            label: None,
            day,
            start,
            end,
        }
    }

    /// Length of the period in minutes.
    pub fn duration_minutes(&self) -> u16 {
        self.end.saturating_sub(self.start)
    }
}

/// One offering (section) of a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSection {
    /// Section identifier, unique within its subject, e.g. `"302"`.
    pub id: String,
    pub periods: Vec<Period>,
    /// Hidden sections stay in the data but are never chosen by the search.
    #[serde(default = "default_shown")]
    pub shown: bool,
}

fn default_shown() -> bool {
    true
}

impl ClassSection {
    pub fn new(id: impl Into<String>, periods: Vec<Period>) -> Self {
        ClassSection {
            id: id.into(),
            periods,
            shown: true,
        }
    }
}

/// A course with interchangeable sections; exactly one section is chosen
/// per candidate timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub title: String,
    pub sections: Vec<ClassSection>,
}

impl Subject {
    pub fn new(title: impl Into<String>, sections: Vec<ClassSection>) -> Self {
        Subject {
            title: title.into(),
            sections,
        }
    }

    /// Indices of the sections the search may pick from.
    pub fn selectable_sections(&self) -> Vec<usize> {
        self.sections
            .iter()
            .enumerate()
            .filter(|(_, section)| section.shown)
            .map(|(i, _)| i)
            .collect()
    }
}

/// A fixed commitment unrelated to any subject, e.g. gym hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub periods: Vec<Period>,
}

/// A subject the student is already enrolled in; its section is fixed and
/// excluded from the choice space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrolledClass {
    pub title: String,
    pub section: ClassSection,
}

/// A division of the day used for fits-within and alignment checks.
///
/// Slots are listed ascending; the first slot's start and the last slot's
/// end are the canonical bounds of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(with = "time::hhmm")]
    pub start: u16,
    #[serde(with = "time::hhmm")]
    pub end: u16,
}

/// Which edge of the day scheduled periods should cluster toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Start,
    End,
}

/// Penalty weights applied by the fitness evaluator. All weights are
/// non-negative; larger values make the corresponding violation costlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Penalties {
    /// Soft preference violations (day-edge alignment).
    pub cultural: i64,
    /// Hard violations: period overlaps and periods outside every time slot.
    pub constraints: i64,
    /// Exceeding the daily hour limit, charged once per offending weekday.
    pub daily: i64,
}

/// A timetable generation problem instance: the subjects to choose sections
/// for, the fixed commitments around them, and the scoring preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub enrolled_classes: Vec<EnrolledClass>,
    pub time_slots: Vec<TimeSlot>,
    /// Maximum scheduled class time per weekday, in hours.
    pub daily_hour_limit: u32,
    pub alignment: Alignment,
    pub penalties: Penalties,
}

impl Problem {
    /// Number of subjects, i.e. the chromosome length.
    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    /// Periods of the fixed commitments (enrolled classes and activities).
    /// These are boundary conditions shared by every candidate timetable.
    pub fn fixed_periods(&self) -> impl Iterator<Item = &Period> {
        self.enrolled_classes
            .iter()
            .flat_map(|enrolled| enrolled.section.periods.iter())
            .chain(
                self.activities
                    .iter()
                    .flat_map(|activity| activity.periods.iter()),
            )
    }

    /// Canonical start of the day: the first time slot's start.
    pub fn day_start(&self) -> Option<u16> {
        self.time_slots.first().map(|slot| slot.start)
    }

    /// Canonical end of the day: the last time slot's end.
    pub fn day_end(&self) -> Option<u16> {
        self.time_slots.last().map(|slot| slot.end)
    }

    /// Check the structural invariants the search relies on. Called once
    /// before any generation runs; a failure here aborts the run with no
    /// partial computation.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        for subject in &self.subjects {
            if subject.selectable_sections().is_empty() {
                return Err(ScheduleError::ConfigurationError(format!(
                    "subject {:?} has no selectable class sections",
                    subject.title
                )));
            }
        }

        if self.time_slots.is_empty() {
            return Err(ScheduleError::ConfigurationError(
                "at least one time slot is required".to_string(),
            ));
        }

        for window in self.time_slots.windows(2) {
            if window[1].start < window[0].start {
                return Err(ScheduleError::ConfigurationError(
                    "time slots must be ordered ascending".to_string(),
                ));
            }
        }

        for slot in &self.time_slots {
            if slot.start >= slot.end {
                return Err(ScheduleError::ConfigurationError(format!(
                    "time slot {}-{} must start before it ends",
                    time::format_minutes(slot.start),
                    time::format_minutes(slot.end)
                )));
            }
        }

        if self.penalties.cultural < 0 || self.penalties.constraints < 0 || self.penalties.daily < 0
        {
            return Err(ScheduleError::ConfigurationError(
                "penalty weights must be non-negative".to_string(),
            ));
        }

        Ok(())
    }
}
