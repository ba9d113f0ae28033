//! Cross-scope conflict detection over scoped weekly intervals.
//!
//! Performs pairwise comparison between a candidate batch and the corpus
//! of existing bookings, classifying each time overlap by the scope the
//! two rows share: the same room (any physician), the same physician in
//! another room of the same center, or the same physician at a different
//! center. The engine only classifies -- whether a class blocks the
//! submission or merely warns is the caller's policy.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::interval::WeeklyInterval;

pub type BookingId = u64;
pub type PhysicianId = u64;
pub type CenterId = u64;
pub type RoomId = u64;
pub type SpecialtyId = u64;

/// One row of existing occupancy or one candidate booking, tagged with
/// the scopes that own it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopedInterval {
    /// Row identity. Edit flows pass the edited row's id in the exclusion
    /// set so a booking is never reported as conflicting with itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BookingId>,
    pub window: WeeklyInterval,
    pub physician: PhysicianId,
    pub center: CenterId,
    /// Absent for availability rows that are not bound to a room.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<RoomId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<SpecialtyId>,
}

/// The scope relationship of a detected conflict, in increasing order of
/// severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConflictKind {
    /// Same room, any physician: the room would be double-booked.
    SameRoom,
    /// Same physician in a different room of the same center.
    SamePhysicianSameCenter,
    /// Same physician booked at two different centers at once -- a
    /// physical impossibility, so callers should demand the strongest
    /// confirmation before allowing it through.
    SamePhysicianOtherCenter,
}

/// A classified overlap between a candidate and an existing booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictRecord {
    pub a: ScopedInterval,
    pub b: ScopedInterval,
    pub kind: ConflictKind,
    /// Size of the shared range, for UI messaging.
    pub overlap_minutes: u16,
}

/// Classify the scope relationship of two rows known to overlap in time.
///
/// Room equality wins over physician equality: a same-room overlap is
/// reported as [`ConflictKind::SameRoom`] whoever the physicians are.
/// A pair sharing neither a room nor a physician is not a conflict.
fn classify(a: &ScopedInterval, b: &ScopedInterval) -> Option<ConflictKind> {
    if let (Some(room_a), Some(room_b)) = (a.room, b.room) {
        if room_a == room_b {
            return Some(ConflictKind::SameRoom);
        }
    }
    if a.physician != b.physician {
        return None;
    }
    if a.center == b.center {
        Some(ConflictKind::SamePhysicianSameCenter)
    } else {
        Some(ConflictKind::SamePhysicianOtherCenter)
    }
}

/// Find and classify every conflict between `candidates` and `existing`.
///
/// Existing rows whose id is in `exclude` are skipped entirely, which
/// lets an edit re-check a booking against everything except itself.
/// Adjacent windows (one ends exactly when the other starts) are not
/// conflicts. An empty result means no conflicts; a non-empty result is
/// data for the caller's severity policy, never an error.
pub fn find_conflicts(
    candidates: &[ScopedInterval],
    existing: &[ScopedInterval],
    exclude: &HashSet<BookingId>,
) -> Vec<ConflictRecord> {
    let mut conflicts = Vec::new();

    for candidate in candidates {
        for booking in existing {
            if booking.id.is_some_and(|id| exclude.contains(&id)) {
                continue;
            }
            let Some(shared) = candidate.window.intersect(&booking.window) else {
                continue;
            };
            let Some(kind) = classify(candidate, booking) else {
                continue;
            };
            conflicts.push(ConflictRecord {
                a: candidate.clone(),
                b: booking.clone(),
                kind,
                overlap_minutes: shared.duration_minutes(),
            });
        }
    }

    conflicts
}
