//! Free-window planning for a physician/room pair.
//!
//! Orchestrates the interval algebra to answer "which weekly slots can
//! physician P be booked into room R": intersect the physician's
//! availability with the room's operating hours, subtract what is already
//! booked, and tag the surviving windows with the pair they were computed
//! for. Segments are computed fresh on every request -- the occupancy
//! corpus may change between calls, so nothing here is cached.

use serde::{Deserialize, Serialize};

use crate::algebra;
use crate::conflict::{PhysicianId, RoomId, ScopedInterval};
use crate::interval::WeeklyInterval;

/// A weekly window known to be free for a specific physician/room pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeSegment {
    pub physician: PhysicianId,
    pub room: RoomId,
    pub window: WeeklyInterval,
}

/// Compute the bookable weekly windows for `physician` in `room`.
///
/// `existing` is whatever corpus the caller considers blocking --
/// typically the room's occupancy plus the physician's commitments
/// everywhere. Empty availability or empty room hours is a valid state,
/// not an error: the result is simply empty and the caller renders an
/// empty-state UI.
///
/// Output is sorted by (day, start).
pub fn plan_free_windows(
    physician: PhysicianId,
    room: RoomId,
    availability: &[WeeklyInterval],
    room_hours: &[WeeklyInterval],
    existing: &[ScopedInterval],
) -> Vec<FreeSegment> {
    let candidate = algebra::intersect_sets(availability, room_hours);
    let occupied: Vec<WeeklyInterval> = existing.iter().map(|e| e.window).collect();

    algebra::subtract(&candidate, &occupied)
        .into_iter()
        .map(|window| FreeSegment {
            physician,
            room,
            window,
        })
        .collect()
}

/// Whether a manually typed range is coverable: some free segment on the
/// same day fully contains `proposed`. Used to validate custom times
/// against computed availability before allowing submission.
pub fn fits_within_free_segments(proposed: &WeeklyInterval, free: &[FreeSegment]) -> bool {
    free.iter().any(|segment| segment.window.contains(proposed))
}

/// Chop free segments into consecutive fixed-length slots.
///
/// Each segment yields slots of exactly `slot_minutes` starting at the
/// segment start; a trailing remainder shorter than a slot is dropped.
/// `slot_minutes == 0` yields nothing.
pub fn generate_slots(free: &[FreeSegment], slot_minutes: u16) -> Vec<FreeSegment> {
    if slot_minutes == 0 {
        return Vec::new();
    }

    let mut slots = Vec::new();
    for segment in free {
        let mut start = segment.window.start();
        while start.minutes_until(segment.window.end()) >= slot_minutes {
            let Ok(end) = start.checked_add(slot_minutes) else {
                break;
            };
            slots.push(FreeSegment {
                physician: segment.physician,
                room: segment.room,
                window: WeeklyInterval::new_unchecked(segment.window.day(), start, end),
            });
            start = end;
        }
    }
    slots
}

/// First segment long enough for `min_minutes`, in (day, start) order.
///
/// Assumes `free` is sorted the way [`plan_free_windows`] returns it.
pub fn first_segment_of_at_least(
    free: &[FreeSegment],
    min_minutes: u16,
) -> Option<&FreeSegment> {
    free.iter()
        .find(|segment| segment.window.duration_minutes() >= min_minutes)
}
