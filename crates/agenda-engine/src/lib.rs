//! # agenda-engine
//!
//! Weekly recurring interval scheduling and conflict classification for
//! clinic agendas.
//!
//! The engine answers "which weekly slots can physician P be booked into
//! room R" by intersecting the physician's weekly availability with the
//! room's operating hours, subtracting the windows already consumed by
//! existing bookings, and classifying overlaps against everything the
//! physician and the room are already committed to -- including bookings
//! at other centers.
//!
//! All times are local wall clock at minute granularity; all recurrence
//! is a plain day-of-week with no calendar dates, time zones, or DST.
//! Every operation is a pure function over immutable values: the engine
//! holds no state and performs no I/O. Results are advisory snapshots of
//! the corpus the caller passed in -- the authoritative overlap check
//! belongs to the persistence layer at commit time.
//!
//! ## Quick start
//!
//! ```rust
//! use agenda_engine::{plan_free_windows, WeeklyInterval};
//!
//! // Raw day tokens in any supported locale normalize on ingestion.
//! let availability = vec![WeeklyInterval::from_raw("lunes", "08:00", "12:00")?];
//! let room_hours = vec![WeeklyInterval::from_raw("MONDAY", "09:00", "17:00")?];
//!
//! let free = plan_free_windows(7, 5, &availability, &room_hours, &[]);
//! assert_eq!(free.len(), 1);
//! assert_eq!(free[0].window.to_string(), "MONDAY 09:00-12:00");
//! # Ok::<(), agenda_engine::AgendaError>(())
//! ```
//!
//! ## Modules
//!
//! - [`clock`] — minute-precision `TimeOfDay` parsing and arithmetic
//! - [`weekday`] — locale-tolerant day-token normalization
//! - [`interval`] — the `WeeklyInterval` value type and its predicates
//! - [`algebra`] — set intersection, subtraction, batch self-validation
//! - [`conflict`] — cross-scope conflict detection and classification
//! - [`planner`] — free-window planning and slot generation
//! - [`error`] — error types

pub mod algebra;
pub mod clock;
pub mod conflict;
pub mod error;
pub mod interval;
pub mod planner;
pub mod weekday;

pub use algebra::{
    ensure_no_internal_overlap, find_internal_overlaps, intersect_sets, subtract, InternalOverlap,
};
pub use clock::TimeOfDay;
pub use conflict::{
    find_conflicts, BookingId, CenterId, ConflictKind, ConflictRecord, PhysicianId, RoomId,
    ScopedInterval, SpecialtyId,
};
pub use error::AgendaError;
pub use interval::WeeklyInterval;
pub use planner::{
    first_segment_of_at_least, fits_within_free_segments, generate_slots, plan_free_windows,
    FreeSegment,
};
pub use weekday::WeekDay;
