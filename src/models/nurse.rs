//! Nurse shift model.

use serde::{Deserialize, Serialize};

use super::TimeWindow;

/// A nurse's working window.
///
/// The first attended surgery may not start before `window.start` and the
/// last may not end after `window.end`. The maximum span of duty is shared
/// by all nurses and lives on [`Instance`](super::Instance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NurseShift {
    /// Earliest start / latest end of the shift (minutes).
    pub window: TimeWindow,
}

impl NurseShift {
    /// Creates a shift from its earliest start and latest end.
    pub fn new(earliest_start: i64, latest_end: i64) -> Self {
        Self {
            window: TimeWindow::new(earliest_start, latest_end),
        }
    }

    /// Earliest shift start (minutes).
    #[inline]
    pub fn earliest_start(&self) -> i64 {
        self.window.start
    }

    /// Latest shift end (minutes).
    #[inline]
    pub fn latest_end(&self) -> i64 {
        self.window.end
    }
}
