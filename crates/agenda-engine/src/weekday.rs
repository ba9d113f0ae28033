//! Canonical day-of-week with locale-tolerant normalization.
//!
//! Raw day tokens arrive from the outside in several shapes: Spanish or
//! English, full or three-letter, accented or not, any casing. Every
//! ingestion point funnels through [`WeekDay::normalize`] so downstream
//! comparisons are always canonical-to-canonical. An unrecognized token
//! is an error, never a best guess -- silently dropping a day would make
//! a schedule look empty instead of wrong.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::error::{AgendaError, Result};

/// The seven canonical days. Ordering is Monday-first, matching the
/// (day, start) sort used for deterministic schedule output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WeekDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl WeekDay {
    /// All days in Monday-first order.
    pub const ALL: [WeekDay; 7] = [
        WeekDay::Monday,
        WeekDay::Tuesday,
        WeekDay::Wednesday,
        WeekDay::Thursday,
        WeekDay::Friday,
        WeekDay::Saturday,
        WeekDay::Sunday,
    ];

    /// Normalize a raw day token to its canonical day.
    ///
    /// The token is trimmed, decomposed (NFD) to strip diacritics, and
    /// uppercased before matching, so `"miércoles"`, `"MIERCOLES"` and
    /// `"  Mie "` all resolve to [`WeekDay::Wednesday`]. Recognized
    /// vocabularies are the full Spanish and English day names plus the
    /// three-letter abbreviations of both.
    pub fn normalize(raw: &str) -> Result<Self> {
        let folded: String = raw
            .trim()
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .collect::<String>()
            .to_uppercase();

        match folded.as_str() {
            "LUNES" | "MONDAY" | "LUN" | "MON" => Ok(WeekDay::Monday),
            "MARTES" | "TUESDAY" | "MAR" | "TUE" => Ok(WeekDay::Tuesday),
            "MIERCOLES" | "WEDNESDAY" | "MIE" | "WED" => Ok(WeekDay::Wednesday),
            "JUEVES" | "THURSDAY" | "JUE" | "THU" => Ok(WeekDay::Thursday),
            "VIERNES" | "FRIDAY" | "VIE" | "FRI" => Ok(WeekDay::Friday),
            "SABADO" | "SATURDAY" | "SAB" | "SAT" => Ok(WeekDay::Saturday),
            "DOMINGO" | "SUNDAY" | "DOM" | "SUN" => Ok(WeekDay::Sunday),
            _ => Err(AgendaError::UnknownWeekday(raw.trim().to_string())),
        }
    }

    /// Canonical uppercase English name, the only form the engine emits.
    pub fn canonical_name(self) -> &'static str {
        match self {
            WeekDay::Monday => "MONDAY",
            WeekDay::Tuesday => "TUESDAY",
            WeekDay::Wednesday => "WEDNESDAY",
            WeekDay::Thursday => "THURSDAY",
            WeekDay::Friday => "FRIDAY",
            WeekDay::Saturday => "SATURDAY",
            WeekDay::Sunday => "SUNDAY",
        }
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl FromStr for WeekDay {
    type Err = AgendaError;

    fn from_str(s: &str) -> Result<Self> {
        WeekDay::normalize(s)
    }
}

impl From<chrono::Weekday> for WeekDay {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => WeekDay::Monday,
            chrono::Weekday::Tue => WeekDay::Tuesday,
            chrono::Weekday::Wed => WeekDay::Wednesday,
            chrono::Weekday::Thu => WeekDay::Thursday,
            chrono::Weekday::Fri => WeekDay::Friday,
            chrono::Weekday::Sat => WeekDay::Saturday,
            chrono::Weekday::Sun => WeekDay::Sunday,
        }
    }
}

impl From<WeekDay> for chrono::Weekday {
    fn from(day: WeekDay) -> Self {
        match day {
            WeekDay::Monday => chrono::Weekday::Mon,
            WeekDay::Tuesday => chrono::Weekday::Tue,
            WeekDay::Wednesday => chrono::Weekday::Wed,
            WeekDay::Thursday => chrono::Weekday::Thu,
            WeekDay::Friday => chrono::Weekday::Fri,
            WeekDay::Saturday => chrono::Weekday::Sat,
            WeekDay::Sunday => chrono::Weekday::Sun,
        }
    }
}

impl Serialize for WeekDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.canonical_name())
    }
}

impl<'de> Deserialize<'de> for WeekDay {
    /// Deserialization is itself an ingestion boundary: any token
    /// [`WeekDay::normalize`] accepts is valid input.
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        WeekDay::normalize(&raw).map_err(serde::de::Error::custom)
    }
}
