//! Error types for agenda-engine operations.

use thiserror::Error;

use crate::clock::TimeOfDay;
use crate::interval::WeeklyInterval;
use crate::weekday::WeekDay;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgendaError {
    /// A raw time string did not match `"HH:MM"` or `"HH:MM:SS"`, or a
    /// field was out of range.
    #[error("malformed time '{0}': expected HH:MM or HH:MM:SS")]
    MalformedTime(String),

    /// A raw day token matched none of the recognized day names.
    #[error("unknown weekday '{0}'")]
    UnknownWeekday(String),

    /// Interval construction with `start >= end`. Intervals never wrap
    /// past midnight.
    #[error("invalid interval on {day}: start {start} is not before end {end}")]
    InvalidInterval {
        day: WeekDay,
        start: TimeOfDay,
        end: TimeOfDay,
    },

    /// Time arithmetic produced a result outside [00:00, 24:00).
    #[error("time arithmetic out of range: {0} minutes from midnight")]
    OutOfRange(i32),

    /// Two intervals submitted in the same batch overlap. This is always
    /// fatal to the submission; unlike cross-scope conflicts it cannot be
    /// confirmed through.
    #[error("intervals submitted together overlap: {first} and {second}")]
    InternalOverlap {
        first: WeeklyInterval,
        second: WeeklyInterval,
    },
}

/// Convenience alias used throughout agenda-engine.
pub type Result<T> = std::result::Result<T, AgendaError>;
