//! A single recurring weekly time range.
//!
//! [`WeeklyInterval`] is the value type everything else operates on: a
//! (day, start, end) tuple anchored to a day of week with no calendar
//! date. Construction validates `start < end`; once built, an interval is
//! immutable and consumed by value.
//!
//! Overlap semantics are half-open throughout: an interval ending at
//! 10:00 and one starting at 10:00 touch but do not overlap.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clock::TimeOfDay;
use crate::error::{AgendaError, Result};
use crate::weekday::WeekDay;

/// A recurring weekly time range. Two intervals on different days never
/// interact.
///
/// Derived ordering is (day, start, end), the deterministic sort order
/// for schedule output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWeeklyInterval", into = "RawWeeklyInterval")]
pub struct WeeklyInterval {
    day: WeekDay,
    start: TimeOfDay,
    end: TimeOfDay,
}

/// Wire shape of an interval. Validation happens in the
/// `TryFrom<RawWeeklyInterval>` conversion so a deserialized interval is
/// as trustworthy as a constructed one.
#[derive(Clone, Serialize, Deserialize)]
struct RawWeeklyInterval {
    day: WeekDay,
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TryFrom<RawWeeklyInterval> for WeeklyInterval {
    type Error = AgendaError;

    fn try_from(raw: RawWeeklyInterval) -> Result<Self> {
        WeeklyInterval::new(raw.day, raw.start, raw.end)
    }
}

impl From<WeeklyInterval> for RawWeeklyInterval {
    fn from(interval: WeeklyInterval) -> Self {
        RawWeeklyInterval {
            day: interval.day,
            start: interval.start,
            end: interval.end,
        }
    }
}

impl WeeklyInterval {
    /// Build an interval, failing with [`AgendaError::InvalidInterval`]
    /// unless `start < end`.
    pub fn new(day: WeekDay, start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        if start >= end {
            return Err(AgendaError::InvalidInterval { day, start, end });
        }
        Ok(WeeklyInterval { day, start, end })
    }

    /// Ingestion-boundary constructor: raw day token plus raw time
    /// strings, normalized and validated in one step.
    pub fn from_raw(day: &str, start: &str, end: &str) -> Result<Self> {
        WeeklyInterval::new(
            WeekDay::normalize(day)?,
            TimeOfDay::parse(start)?,
            TimeOfDay::parse(end)?,
        )
    }

    /// Internal constructor for ranges already known to be well-formed.
    pub(crate) fn new_unchecked(day: WeekDay, start: TimeOfDay, end: TimeOfDay) -> Self {
        debug_assert!(start < end);
        WeeklyInterval { day, start, end }
    }

    pub fn day(&self) -> WeekDay {
        self.day
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    pub fn duration_minutes(&self) -> u16 {
        self.start.minutes_until(self.end)
    }

    /// Two intervals overlap iff they share a day and
    /// `start < other.end && other.start < end`. Touching endpoints
    /// (09:00-10:00 vs 10:00-11:00) do NOT overlap.
    pub fn overlaps(&self, other: &WeeklyInterval) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }

    /// The shared range of two intervals, or `None` when they are on
    /// different days or only touch.
    pub fn intersect(&self, other: &WeeklyInterval) -> Option<WeeklyInterval> {
        if self.day != other.day {
            return None;
        }
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then(|| WeeklyInterval {
            day: self.day,
            start,
            end,
        })
    }

    /// Range containment: `other` lies entirely within `self`, same day.
    /// Shared endpoints count as contained.
    pub fn contains(&self, other: &WeeklyInterval) -> bool {
        self.day == other.day && self.start <= other.start && other.end <= self.end
    }

    /// Point containment, half-open: the interval's end time is not part
    /// of the interval.
    pub fn contains_time(&self, t: TimeOfDay) -> bool {
        self.start <= t && t < self.end
    }
}

impl fmt::Display for WeeklyInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.day, self.start, self.end)
    }
}
