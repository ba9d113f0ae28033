//! Tests for free-window planning and slot generation.

use agenda_engine::{
    first_segment_of_at_least, fits_within_free_segments, generate_slots, plan_free_windows,
    FreeSegment, ScopedInterval, WeeklyInterval,
};

const PHYSICIAN: u64 = 7;
const ROOM: u64 = 5;
const CENTER: u64 = 1;

fn window(day: &str, start: &str, end: &str) -> WeeklyInterval {
    WeeklyInterval::from_raw(day, start, end).unwrap()
}

fn booking(day: &str, start: &str, end: &str) -> ScopedInterval {
    ScopedInterval {
        id: None,
        window: window(day, start, end),
        physician: PHYSICIAN,
        center: CENTER,
        room: Some(ROOM),
        specialty: None,
    }
}

// ── plan_free_windows ───────────────────────────────────────────────────────

#[test]
fn plans_around_an_existing_booking() {
    // Physician available MONDAY 08:00-12:00, room open MONDAY
    // 09:00-17:00, one booking at 10:00-10:30: the candidate window is
    // 09:00-12:00 and the booking splits it in two.
    let availability = vec![window("MONDAY", "08:00", "12:00")];
    let room_hours = vec![window("MONDAY", "09:00", "17:00")];
    let existing = vec![booking("MONDAY", "10:00", "10:30")];

    let free = plan_free_windows(PHYSICIAN, ROOM, &availability, &room_hours, &existing);

    let windows: Vec<WeeklyInterval> = free.iter().map(|s| s.window).collect();
    assert_eq!(
        windows,
        vec![
            window("MONDAY", "09:00", "10:00"),
            window("MONDAY", "10:30", "12:00"),
        ]
    );
    assert!(free.iter().all(|s| s.physician == PHYSICIAN && s.room == ROOM));
}

#[test]
fn no_availability_is_an_empty_result_not_an_error() {
    let room_hours = vec![window("MONDAY", "09:00", "17:00")];
    assert!(plan_free_windows(PHYSICIAN, ROOM, &[], &room_hours, &[]).is_empty());
    assert!(plan_free_windows(PHYSICIAN, ROOM, &room_hours, &[], &[]).is_empty());
}

#[test]
fn disjoint_schedules_yield_no_windows() {
    let availability = vec![window("MONDAY", "08:00", "12:00")];
    let room_hours = vec![window("TUESDAY", "08:00", "12:00")];
    assert!(plan_free_windows(PHYSICIAN, ROOM, &availability, &room_hours, &[]).is_empty());
}

#[test]
fn bookings_across_the_week_only_affect_their_own_day() {
    let availability = vec![
        window("MONDAY", "09:00", "12:00"),
        window("THURSDAY", "09:00", "12:00"),
    ];
    let room_hours = availability.clone();
    let existing = vec![booking("THURSDAY", "09:00", "12:00")];

    let free = plan_free_windows(PHYSICIAN, ROOM, &availability, &room_hours, &existing);
    let windows: Vec<WeeklyInterval> = free.iter().map(|s| s.window).collect();
    assert_eq!(windows, vec![window("MONDAY", "09:00", "12:00")]);
}

// ── fits_within_free_segments ───────────────────────────────────────────────

#[test]
fn proposed_range_inside_a_segment_fits() {
    let availability = vec![window("MONDAY", "09:00", "12:00")];
    let free = plan_free_windows(PHYSICIAN, ROOM, &availability, &availability, &[]);

    assert!(fits_within_free_segments(
        &window("MONDAY", "09:00", "10:00"),
        &free
    ));
    assert!(fits_within_free_segments(
        &window("MONDAY", "09:00", "12:00"),
        &free
    ));
}

#[test]
fn proposed_range_crossing_a_segment_edge_does_not_fit() {
    let availability = vec![window("MONDAY", "09:00", "12:00")];
    let free = plan_free_windows(PHYSICIAN, ROOM, &availability, &availability, &[]);

    assert!(!fits_within_free_segments(
        &window("MONDAY", "08:30", "10:00"),
        &free
    ));
    assert!(!fits_within_free_segments(
        &window("TUESDAY", "09:00", "10:00"),
        &free
    ));
}

#[test]
fn a_range_spanning_two_segments_does_not_fit() {
    // Free 09:00-10:00 and 10:30-12:00; a 09:30-11:00 request straddles
    // the booked gap and must be refused.
    let availability = vec![window("MONDAY", "09:00", "12:00")];
    let existing = vec![booking("MONDAY", "10:00", "10:30")];
    let free = plan_free_windows(PHYSICIAN, ROOM, &availability, &availability, &existing);

    assert!(!fits_within_free_segments(
        &window("MONDAY", "09:30", "11:00"),
        &free
    ));
}

// ── slot generation ─────────────────────────────────────────────────────────

#[test]
fn chops_segments_into_fixed_length_slots() {
    let free = vec![FreeSegment {
        physician: PHYSICIAN,
        room: ROOM,
        window: window("MONDAY", "09:00", "10:30"),
    }];

    let slots = generate_slots(&free, 30);
    let windows: Vec<WeeklyInterval> = slots.iter().map(|s| s.window).collect();
    assert_eq!(
        windows,
        vec![
            window("MONDAY", "09:00", "09:30"),
            window("MONDAY", "09:30", "10:00"),
            window("MONDAY", "10:00", "10:30"),
        ]
    );
}

#[test]
fn trailing_remainder_shorter_than_a_slot_is_dropped() {
    let free = vec![FreeSegment {
        physician: PHYSICIAN,
        room: ROOM,
        window: window("MONDAY", "09:00", "09:50"),
    }];

    let slots = generate_slots(&free, 30);
    assert_eq!(slots.len(), 1, "the 20-minute tail cannot hold a slot");
    assert_eq!(slots[0].window, window("MONDAY", "09:00", "09:30"));
}

#[test]
fn segment_shorter_than_a_slot_yields_nothing() {
    let free = vec![FreeSegment {
        physician: PHYSICIAN,
        room: ROOM,
        window: window("MONDAY", "09:00", "09:20"),
    }];
    assert!(generate_slots(&free, 30).is_empty());
}

#[test]
fn zero_length_slots_yield_nothing() {
    let free = vec![FreeSegment {
        physician: PHYSICIAN,
        room: ROOM,
        window: window("MONDAY", "09:00", "12:00"),
    }];
    assert!(generate_slots(&free, 0).is_empty());
}

#[test]
fn first_fit_respects_day_start_order() {
    let availability = vec![
        window("MONDAY", "09:00", "09:30"),
        window("WEDNESDAY", "09:00", "12:00"),
    ];
    let free = plan_free_windows(PHYSICIAN, ROOM, &availability, &availability, &[]);

    let hit = first_segment_of_at_least(&free, 60).expect("Wednesday can hold an hour");
    assert_eq!(hit.window, window("WEDNESDAY", "09:00", "12:00"));

    assert!(first_segment_of_at_least(&free, 240).is_none());
}
