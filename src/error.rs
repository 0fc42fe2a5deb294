//! Error types for the timetable engine.

use thiserror::Error;

/// Errors surfaced by the scheduling engine.
///
/// Both variants are reported synchronously before or during `run`; the
/// search itself never fails once it has started.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A time string did not match the expected `HH:MM` shape.
    #[error("invalid time format: {0:?}")]
    InvalidTimeFormat(String),

    /// The problem or algorithm configuration is structurally invalid.
    #[error("configuration error: {0}")]
    ConfigurationError(String),
}
