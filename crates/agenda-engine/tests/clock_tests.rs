//! Tests for minute-precision time parsing, formatting, and arithmetic.

use agenda_engine::error::AgendaError;
use agenda_engine::TimeOfDay;
use chrono::NaiveTime;

fn t(text: &str) -> TimeOfDay {
    TimeOfDay::parse(text).unwrap()
}

// ── Parsing ─────────────────────────────────────────────────────────────────

#[test]
fn parses_hh_mm() {
    assert_eq!(t("09:30").minutes(), 9 * 60 + 30);
    assert_eq!(t("00:00").minutes(), 0);
    assert_eq!(t("23:59").minutes(), 23 * 60 + 59);
}

#[test]
fn parses_hh_mm_ss_discarding_seconds() {
    // The engine is minute-granular; seconds are validated then dropped.
    assert_eq!(t("09:30:00"), t("09:30"));
    assert_eq!(t("09:30:59"), t("09:30"));
}

#[test]
fn rejects_out_of_range_fields() {
    for bad in ["24:00", "25:99", "12:60", "09:30:60"] {
        assert_eq!(
            TimeOfDay::parse(bad),
            Err(AgendaError::MalformedTime(bad.to_string())),
            "'{bad}' should be rejected"
        );
    }
}

#[test]
fn rejects_malformed_shapes() {
    for bad in ["", "09", "9:30", "09:3", "0930", "09:30:00:00", "ab:cd", " 09:30", "09:30 "] {
        assert!(
            TimeOfDay::parse(bad).is_err(),
            "'{bad}' should not parse as a time"
        );
    }
}

// ── Formatting ──────────────────────────────────────────────────────────────

#[test]
fn formats_as_zero_padded_hh_mm() {
    assert_eq!(t("09:05").to_string(), "09:05");
    assert_eq!(t("00:00").to_string(), "00:00");
    assert_eq!(t("23:59:59").to_string(), "23:59");
}

// ── Arithmetic ──────────────────────────────────────────────────────────────

#[test]
fn checked_add_within_day() {
    assert_eq!(t("09:00").checked_add(90).unwrap(), t("10:30"));
}

#[test]
fn checked_add_past_midnight_fails() {
    let result = t("23:30").checked_add(30);
    assert!(
        matches!(result, Err(AgendaError::OutOfRange(_))),
        "23:30 + 30min reaches 24:00, which is outside the day"
    );
}

#[test]
fn checked_sub_within_day() {
    assert_eq!(t("10:30").checked_sub(90).unwrap(), t("09:00"));
    assert_eq!(t("00:30").checked_sub(30).unwrap(), t("00:00"));
}

#[test]
fn checked_sub_before_midnight_fails() {
    assert!(matches!(
        t("00:15").checked_sub(30),
        Err(AgendaError::OutOfRange(_))
    ));
}

#[test]
fn ordering_is_chronological() {
    assert!(t("08:00") < t("08:01"));
    assert!(t("23:59") > t("00:00"));
    assert_eq!(t("12:00").cmp(&t("12:00")), std::cmp::Ordering::Equal);
}

#[test]
fn minutes_until_is_zero_for_earlier_times() {
    assert_eq!(t("09:00").minutes_until(t("10:30")), 90);
    assert_eq!(t("10:30").minutes_until(t("09:00")), 0);
}

// ── chrono interop ──────────────────────────────────────────────────────────

#[test]
fn converts_to_and_from_naive_time() {
    let naive: NaiveTime = t("14:45").into();
    assert_eq!(naive, NaiveTime::from_hms_opt(14, 45, 0).unwrap());

    // Seconds truncate on the way in.
    let with_seconds = NaiveTime::from_hms_opt(14, 45, 30).unwrap();
    assert_eq!(TimeOfDay::from(with_seconds), t("14:45"));
}

// ── serde boundary ──────────────────────────────────────────────────────────

#[test]
fn serializes_as_hh_mm_string() {
    assert_eq!(serde_json::to_string(&t("09:30")).unwrap(), "\"09:30\"");
}

#[test]
fn deserializes_from_either_accepted_shape() {
    let short: TimeOfDay = serde_json::from_str("\"09:30\"").unwrap();
    let long: TimeOfDay = serde_json::from_str("\"09:30:15\"").unwrap();
    assert_eq!(short, long);
}

#[test]
fn deserialization_rejects_malformed_times() {
    let result: Result<TimeOfDay, _> = serde_json::from_str("\"25:99\"");
    assert!(result.is_err(), "out-of-range time must not deserialize");
}
