//! Time window model.
//!
//! Surgery windows and nurse shifts are both closed intervals of
//! admissible endpoints: an activity fits a window iff it starts at or
//! after `start` and ends at or before `end`.
//!
//! # Time Model
//! All times are in minutes relative to the instance epoch (t=0).

use serde::{Deserialize, Serialize};

/// A closed time interval [start, end] in minutes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeWindow {
    /// Earliest admissible start (minutes, inclusive).
    pub start: i64,
    /// Latest admissible end (minutes, inclusive).
    pub end: i64,
}

/// Amount by which `value` exceeds `limit` (0 if it does not).
///
/// Exact for any pair of `i64` values.
#[inline]
pub fn excess(value: i64, limit: i64) -> u64 {
    if value > limit {
        value.abs_diff(limit)
    } else {
        0
    }
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Length of this window (minutes). Negative for inverted windows.
    ///
    /// Saturates at the `i64` bounds.
    #[inline]
    pub fn length(&self) -> i64 {
        self.end.saturating_sub(self.start)
    }

    /// Latest start that still lets an activity of `duration` end in time.
    ///
    /// Returns `None` if the window has no slack for `duration`, including
    /// when `end - duration` is not representable.
    pub fn latest_start(&self, duration: i64) -> Option<i64> {
        let latest = self.end.checked_sub(duration)?;
        (latest >= self.start).then_some(latest)
    }

    /// Minutes by which `time` falls before the window start (0 if not early).
    #[inline]
    pub fn early_by(&self, time: i64) -> u64 {
        excess(self.start, time)
    }

    /// Minutes by which `time` falls after the window end (0 if not late).
    #[inline]
    pub fn late_by(&self, time: i64) -> u64 {
        excess(time, self.end)
    }
}
