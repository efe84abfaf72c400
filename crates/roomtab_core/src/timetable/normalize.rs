//! Day and time token normalizers.
//!
//! # Responsibility
//! - Map raw day tokens onto weekday ordinals.
//! - Map raw time tokens onto clock values via an ordered candidate list of
//!   accepted formats.
//!
//! # Invariants
//! - Both normalizers are total: any string, including empty or non-ASCII
//!   input, produces a value without panicking.
//! - Unrecognized tokens map to sentinels that sort after every recognized
//!   value.

use chrono::NaiveTime;
use once_cell::sync::Lazy;

/// Ordinal assigned to day tokens that match no known weekday prefix.
/// Sorts after Sunday (7).
pub const UNKNOWN_DAY_ORDINAL: u8 = 99;

/// Accepted time formats, tried in order; the first successful parse wins.
///
/// 12-hour variants come first so meridiem-marked tokens are never
/// misread, then 24-hour with minute and second precision.
const TIME_FORMATS: &[&str] = &["%I:%M %p", "%I:%M%p", "%H:%M", "%H:%M:%S"];

static SENTINEL_TIME: Lazy<NaiveTime> = Lazy::new(|| {
    NaiveTime::from_hms_milli_opt(23, 59, 59, 999).expect("valid sentinel clock value")
});

/// Maximum representable time of day, used when no format matches.
///
/// Keyed with this value, an unparseable entry sinks to the end of its day
/// group instead of aborting the listing.
pub fn sentinel_time() -> NaiveTime {
    *SENTINEL_TIME
}

/// Collapses a free-form day token to a weekday ordinal 1..=7.
///
/// Trims surrounding whitespace, lower-cases, and matches on the first
/// three characters, so "Tuesday", "tuesday", "Tue" and " TUE " all map to
/// 2. Anything else maps to [`UNKNOWN_DAY_ORDINAL`].
pub fn normalize_day(raw: &str) -> u8 {
    let token = raw.trim().to_ascii_lowercase();
    let prefix: String = token.chars().take(3).collect();
    match prefix.as_str() {
        "mon" => 1,
        "tue" => 2,
        "wed" => 3,
        "thu" => 4,
        "fri" => 5,
        "sat" => 6,
        "sun" => 7,
        _ => UNKNOWN_DAY_ORDINAL,
    }
}

/// Parses a free-form time token into a comparable clock value.
///
/// Trims surrounding whitespace and upper-cases the meridiem marker, then
/// tries each entry of [`TIME_FORMATS`] in order. Empty input or a token no
/// format accepts yields [`sentinel_time`].
pub fn normalize_time(raw: &str) -> NaiveTime {
    let token = raw.trim().to_ascii_uppercase();
    if token.is_empty() {
        return sentinel_time();
    }

    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(&token, format).ok())
        .unwrap_or_else(sentinel_time)
}
