//! Timetable normalization and ordering engine.
//!
//! # Responsibility
//! - Collapse free-form day and time tokens into canonical comparable
//!   values.
//! - Produce a deterministic, total ordering of a room's schedule entries:
//!   Monday morning first, Sunday evening last.
//!
//! # Invariants
//! - Every input token yields a value; malformed data degrades its own
//!   position in the output instead of failing the listing.
//! - Entries with identical keys keep their relative input order.
//! - This module is pure: no storage access, no shared state, safe to call
//!   concurrently.

pub mod normalize;
pub mod order;

pub use normalize::{normalize_day, normalize_time, sentinel_time, UNKNOWN_DAY_ORDINAL};
pub use order::{assemble, build_key, SortKey, UNSORTABLE_DAY_ORDINAL};
