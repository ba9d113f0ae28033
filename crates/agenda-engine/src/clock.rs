//! Minute-precision wall-clock time arithmetic.
//!
//! All scheduling in the engine happens at minute granularity on a plain
//! local wall clock -- no dates, no time zones, no DST. [`TimeOfDay`] is
//! the number of minutes since midnight, strictly inside [0, 1440), so an
//! interval can never wrap past midnight.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{AgendaError, Result};

/// Upper bound (exclusive) for a minute count within one day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock time of day with minute precision.
///
/// Ordering is chronological, so `Ord::cmp` is the three-way compare
/// between two times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Midnight, the first representable time of a day.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Build from a raw minute count since midnight.
    pub fn from_minutes(minutes: u16) -> Result<Self> {
        if minutes >= MINUTES_PER_DAY {
            return Err(AgendaError::OutOfRange(i32::from(minutes)));
        }
        Ok(TimeOfDay(minutes))
    }

    /// Parse `"HH:MM"` or `"HH:MM:SS"`.
    ///
    /// Fields are exactly two digits; hours must be in [0,23] and minutes
    /// and seconds in [0,59]. Seconds are accepted and discarded -- the
    /// engine never tracks sub-minute precision. Anything else fails with
    /// [`AgendaError::MalformedTime`].
    pub fn parse(text: &str) -> Result<Self> {
        fn field(raw: &str, max: u16) -> Option<u16> {
            if raw.len() != 2 || !raw.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            raw.parse().ok().filter(|&n| n <= max)
        }

        let malformed = || AgendaError::MalformedTime(text.to_string());

        let mut parts = text.split(':');
        let hours = parts
            .next()
            .and_then(|raw| field(raw, 23))
            .ok_or_else(malformed)?;
        let minutes = parts
            .next()
            .and_then(|raw| field(raw, 59))
            .ok_or_else(malformed)?;
        if let Some(seconds) = parts.next() {
            field(seconds, 59).ok_or_else(malformed)?;
        }
        if parts.next().is_some() {
            return Err(malformed());
        }

        Ok(TimeOfDay(hours * 60 + minutes))
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// The hour component, [0,23].
    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    /// The minute component, [0,59].
    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Add `minutes`, failing with [`AgendaError::OutOfRange`] if the
    /// result leaves the day.
    pub fn checked_add(self, minutes: u16) -> Result<Self> {
        let total = i32::from(self.0) + i32::from(minutes);
        if total >= i32::from(MINUTES_PER_DAY) {
            return Err(AgendaError::OutOfRange(total));
        }
        Ok(TimeOfDay(total as u16))
    }

    /// Subtract `minutes`, failing with [`AgendaError::OutOfRange`] if the
    /// result would land before midnight.
    pub fn checked_sub(self, minutes: u16) -> Result<Self> {
        let total = i32::from(self.0) - i32::from(minutes);
        if total < 0 {
            return Err(AgendaError::OutOfRange(total));
        }
        Ok(TimeOfDay(total as u16))
    }

    /// Minutes from `self` to `later`, or 0 when `later` is not after
    /// `self`.
    pub fn minutes_until(self, later: TimeOfDay) -> u16 {
        later.0.saturating_sub(self.0)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = AgendaError;

    fn from_str(s: &str) -> Result<Self> {
        TimeOfDay::parse(s)
    }
}

impl From<NaiveTime> for TimeOfDay {
    /// Truncates to minute precision. `NaiveTime` is always within a day,
    /// so the conversion cannot fail.
    fn from(t: NaiveTime) -> Self {
        TimeOfDay((t.hour() * 60 + t.minute()) as u16)
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(t: TimeOfDay) -> Self {
        NaiveTime::from_hms_opt(u32::from(t.hour()), u32::from(t.minute()), 0)
            .expect("TimeOfDay is always within [00:00, 24:00)")
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        TimeOfDay::parse(&raw).map_err(serde::de::Error::custom)
    }
}
