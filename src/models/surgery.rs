//! Surgery model.
//!
//! A surgery is the unit of work to be scheduled: it must run inside its
//! time window for exactly its duration, in a compatible operating room,
//! attended by a minimum number of nurses.

use serde::{Deserialize, Serialize};

use super::TimeWindow;

/// A surgery to be scheduled.
///
/// # Time Representation
/// All times are in minutes relative to the instance epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surgery {
    /// Admissible interval: start >= `window.start`, end <= `window.end`.
    pub window: TimeWindow,
    /// Exact processing time (minutes).
    pub duration: i64,
    /// Minimum number of nurses that must attend.
    pub needed_nurses: usize,
    /// Per-room flags, `true` = this surgery cannot use the room.
    pub incompatible_rooms: Vec<bool>,
}

impl Surgery {
    /// Creates a surgery with the given window and duration.
    ///
    /// Starts with no nurse requirement and no incompatible rooms.
    pub fn new(min_start: i64, max_end: i64, duration: i64) -> Self {
        Self {
            window: TimeWindow::new(min_start, max_end),
            duration,
            needed_nurses: 0,
            incompatible_rooms: Vec::new(),
        }
    }

    /// Sets the required nurse headcount.
    pub fn with_needed_nurses(mut self, needed: usize) -> Self {
        self.needed_nurses = needed;
        self
    }

    /// Replaces the room incompatibility flags.
    pub fn with_incompatible_rooms(mut self, flags: Vec<bool>) -> Self {
        self.incompatible_rooms = flags;
        self
    }

    /// Marks a single room as incompatible, growing the flag vector if needed.
    pub fn with_incompatible_room(mut self, room: usize) -> Self {
        if self.incompatible_rooms.len() <= room {
            self.incompatible_rooms.resize(room + 1, false);
        }
        self.incompatible_rooms[room] = true;
        self
    }

    /// Earliest admissible start (minutes).
    #[inline]
    pub fn min_start(&self) -> i64 {
        self.window.start
    }

    /// Latest admissible end (minutes).
    #[inline]
    pub fn max_end(&self) -> i64 {
        self.window.end
    }

    /// Latest start that keeps the surgery inside its window, if any.
    pub fn latest_start(&self) -> Option<i64> {
        self.window.latest_start(self.duration)
    }

    /// Whether the surgery is forbidden from `room`.
    ///
    /// Rooms beyond the flag vector are reported compatible; range
    /// checking is the caller's concern.
    pub fn is_incompatible(&self, room: usize) -> bool {
        self.incompatible_rooms.get(room).copied().unwrap_or(false)
    }

    /// Whether at least one of the first `num_rooms` rooms is usable.
    pub fn has_compatible_room(&self, num_rooms: usize) -> bool {
        (0..num_rooms).any(|r| !self.is_incompatible(r))
    }
}
