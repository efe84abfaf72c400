//! Ordering key builder and timetable assembler.
//!
//! # Responsibility
//! - Combine normalized day and time values into one sortable key per
//!   schedule entry.
//! - Sort a room's entries into their effective weekly order.
//!
//! # Invariants
//! - Key comparison is lexicographic: day ordinal first, start time second.
//! - Key building is total; there is no code path that aborts a listing.
//! - Sorting is stable, so identical keys keep input order.

use crate::model::schedule::Schedule;
use crate::timetable::normalize::{normalize_day, normalize_time, sentinel_time};
use chrono::NaiveTime;

/// Day ordinal reserved for entries whose key cannot be derived at all.
///
/// Distinct from [`UNKNOWN_DAY_ORDINAL`](crate::timetable::UNKNOWN_DAY_ORDINAL):
/// an entry with a present-but-unrecognized day token lands in the 99
/// bucket, while an entry with no usable fields lands here, after it.
pub const UNSORTABLE_DAY_ORDINAL: u8 = 100;

/// Sortable key for one schedule entry.
///
/// Field order drives the derived `Ord`: day ordinal is the primary
/// criterion, start-of-block time the tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    pub day: u8,
    pub start: NaiveTime,
}

impl SortKey {
    /// Builds a key from raw day and start tokens.
    pub fn new(day_token: &str, start_token: &str) -> Self {
        Self {
            day: normalize_day(day_token),
            start: normalize_time(start_token),
        }
    }

    /// Worst-case key, sorting after every entry with a resolvable day
    /// token including the unknown-day bucket.
    pub fn unsortable() -> Self {
        Self {
            day: UNSORTABLE_DAY_ORDINAL,
            start: sentinel_time(),
        }
    }
}

/// Builds the ordering key for one schedule entry.
pub fn build_key(entry: &Schedule) -> SortKey {
    SortKey::new(&entry.day, &entry.start)
}

/// Sorts schedule entries into their effective weekly order.
///
/// Stable ascending sort by [`build_key`]; pure and idempotent, so
/// repeated calls over unchanged input return the identical sequence. The
/// caller supplies already-fetched entries, keeping this path decoupled
/// from storage.
pub fn assemble(mut entries: Vec<Schedule>) -> Vec<Schedule> {
    entries.sort_by_cached_key(build_key);
    entries
}

#[cfg(test)]
mod tests {
    use super::{assemble, build_key, SortKey};
    use crate::model::schedule::Schedule;
    use crate::timetable::normalize::UNKNOWN_DAY_ORDINAL;

    fn entry(id: i64, day: &str, start: &str) -> Schedule {
        Schedule {
            id,
            day: day.to_string(),
            start: start.to_string(),
            end: "whenever".to_string(),
            subject: "Subject".to_string(),
            section: "S-1".to_string(),
            teacher: "Teacher".to_string(),
            room_tag: "CR-1".to_string(),
        }
    }

    fn ids(entries: &[Schedule]) -> Vec<i64> {
        entries.iter().map(|entry| entry.id).collect()
    }

    #[test]
    fn key_comparison_is_day_first_then_start() {
        assert!(SortKey::new("mon", "11:00 PM") < SortKey::new("tue", "6:00 AM"));
        assert!(SortKey::new("mon", "8:30 AM") < SortKey::new("mon", "09:00"));
    }

    #[test]
    fn mixed_format_entries_sort_into_week_order() {
        let sorted = assemble(vec![
            entry(1, "Fri", "1:00 PM"),
            entry(2, "mon", "09:00"),
            entry(3, "Monday", "8:30 AM"),
        ]);
        assert_eq!(ids(&sorted), vec![3, 2, 1]);
    }

    #[test]
    fn unknown_day_sorts_after_every_recognized_day() {
        let sorted = assemble(vec![
            entry(1, "xyz", "6:00 AM"),
            entry(2, "Sunday", "11:00 PM"),
            entry(3, "mon", "7:00 AM"),
        ]);
        assert_eq!(ids(&sorted), vec![3, 2, 1]);
    }

    #[test]
    fn unparseable_time_sinks_to_end_of_its_day_group() {
        let sorted = assemble(vec![
            entry(1, "wed", "garbage"),
            entry(2, "wed", "11:30 PM"),
            entry(3, "thu", "6:00 AM"),
        ]);
        assert_eq!(ids(&sorted), vec![2, 1, 3]);
    }

    #[test]
    fn identical_keys_keep_input_order() {
        let sorted = assemble(vec![
            entry(7, "mon", "8:00 AM"),
            entry(3, "Monday", "08:00"),
            entry(5, "MON", "8:00AM"),
        ]);
        assert_eq!(ids(&sorted), vec![7, 3, 5]);
    }

    #[test]
    fn assemble_is_idempotent() {
        let first = assemble(vec![
            entry(1, "sat", "10:00"),
            entry(2, "tue", ""),
            entry(3, "tue", "7:15 AM"),
        ]);
        let second = assemble(first.clone());
        assert_eq!(first, second);
    }

    #[test]
    fn unsortable_tier_sorts_after_unknown_day_bucket() {
        let unknown_day = SortKey::new("bogus", "not-a-time");
        assert_eq!(unknown_day.day, UNKNOWN_DAY_ORDINAL);
        assert!(SortKey::unsortable() > unknown_day);
    }

    #[test]
    fn build_key_matches_entry_tokens() {
        let key = build_key(&entry(1, " FRIDAY ", "1:00PM"));
        assert_eq!(key, SortKey::new("fri", "13:00"));
    }
}
