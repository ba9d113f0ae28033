//! Set-level operations over collections of weekly intervals.
//!
//! Three operations cover everything the planner and the submission flows
//! need: intersection of two weekly schedules ("doctor available AND room
//! open"), subtraction of occupied windows from available ones ("free
//! segments"), and validation that a single submitted batch does not
//! overlap itself.
//!
//! Operands are assumed internally non-overlapping -- callers submit each
//! batch through [`find_internal_overlaps`] first. Output is always
//! sorted by (day, start, end) so results are deterministic.

use crate::error::{AgendaError, Result};
use crate::interval::WeeklyInterval;

/// All pairwise non-empty intersections between two weekly schedules.
///
/// For every day, every interval of `a` is clipped against every interval
/// of `b` on that day; only non-empty ranges survive. With internally
/// non-overlapping operands the result needs no deduplication.
pub fn intersect_sets(a: &[WeeklyInterval], b: &[WeeklyInterval]) -> Vec<WeeklyInterval> {
    let mut out: Vec<WeeklyInterval> = a
        .iter()
        .flat_map(|x| b.iter().filter_map(|y| x.intersect(y)))
        .collect();
    out.sort();
    out
}

/// The free segments left of `available` after removing `occupied`.
///
/// Each available interval is swept with a cursor across the occupied
/// entries that intersect it, sorted by start; the gaps before, between
/// and after the busy ranges are emitted. An occupied interval that only
/// partially overlaps an available one truncates it rather than removing
/// it, and an available interval with no occupied entries on its day
/// passes through unchanged.
///
/// Occupied entries may overlap each other (they typically come from
/// several scopes at once); the cursor sweep merges them implicitly.
pub fn subtract(available: &[WeeklyInterval], occupied: &[WeeklyInterval]) -> Vec<WeeklyInterval> {
    let mut free = Vec::new();

    for window in available {
        // Occupied ranges clipped to this window, sorted by start.
        let mut busy: Vec<WeeklyInterval> = occupied
            .iter()
            .filter_map(|o| window.intersect(o))
            .collect();
        busy.sort();

        let mut cursor = window.start();
        for block in &busy {
            if cursor < block.start() {
                free.push(WeeklyInterval::new_unchecked(
                    window.day(),
                    cursor,
                    block.start(),
                ));
            }
            cursor = cursor.max(block.end());
        }
        if cursor < window.end() {
            free.push(WeeklyInterval::new_unchecked(
                window.day(),
                cursor,
                window.end(),
            ));
        }
    }

    free.sort();
    free
}

/// A pair of same-batch intervals that collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InternalOverlap {
    pub first: WeeklyInterval,
    pub second: WeeklyInterval,
}

/// Every overlapping pair within a single submitted batch.
///
/// Runs before any cross-scope conflict check: a batch that collides with
/// itself is rejected outright, so reporting all pairs lets the caller
/// show the complete problem in one pass. An empty result means the batch
/// is internally consistent.
pub fn find_internal_overlaps(set: &[WeeklyInterval]) -> Vec<InternalOverlap> {
    let mut sorted = set.to_vec();
    sorted.sort();

    let mut overlaps = Vec::new();
    for (i, a) in sorted.iter().enumerate() {
        for b in &sorted[i + 1..] {
            // Sorted by (day, start): once b leaves a's day or starts at
            // or after a's end, nothing later can overlap a.
            if b.day() != a.day() || b.start() >= a.end() {
                break;
            }
            overlaps.push(InternalOverlap {
                first: *a,
                second: *b,
            });
        }
    }
    overlaps
}

/// Submission-flow convenience: the first colliding pair becomes the
/// fatal [`AgendaError::InternalOverlap`].
pub fn ensure_no_internal_overlap(set: &[WeeklyInterval]) -> Result<()> {
    match find_internal_overlaps(set).into_iter().next() {
        Some(pair) => Err(AgendaError::InternalOverlap {
            first: pair.first,
            second: pair.second,
        }),
        None => Ok(()),
    }
}
