//! # Tick Converter
//!
//! The wire format stores timestamps as 100-nanosecond ticks counted from
//! 0001-01-01. Everywhere else timestamps are Unix-epoch milliseconds.

use std::time::{SystemTime, UNIX_EPOCH};

/// Ticks at 1970-01-01T00:00:00Z.
pub const EPOCH_TICKS: i64 = 621_355_968_000_000_000;

/// Ticks per millisecond.
pub const TICKS_PER_MILLISECOND: i64 = 10_000;

/// Convert Unix milliseconds to ticks.
///
/// Saturates at the `i64` bounds instead of wrapping.
pub fn to_ticks(millis: i64) -> i64 {
    millis
        .saturating_mul(TICKS_PER_MILLISECOND)
        .saturating_add(EPOCH_TICKS)
}

/// Convert Unix milliseconds to ticks, or `None` if the result leaves the
/// `i64` range.
pub fn checked_to_ticks(millis: i64) -> Option<i64> {
    millis
        .checked_mul(TICKS_PER_MILLISECOND)?
        .checked_add(EPOCH_TICKS)
}

/// Convert ticks to Unix milliseconds, rounding toward negative infinity.
pub fn from_ticks(ticks: i64) -> i64 {
    ticks
        .saturating_sub(EPOCH_TICKS)
        .div_euclid(TICKS_PER_MILLISECOND)
}

/// Current Unix time in milliseconds.
///
/// Returns 0 if the system clock is set before the Unix epoch.
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
