//! Problem instance model.
//!
//! An instance is the static input of the scheduling problem: the number
//! of operating rooms, the nurses with their shifts, and the surgeries.
//! It is built once (usually by [`crate::parser`]) and only read afterwards.

use serde::{Deserialize, Serialize};

use super::{NurseShift, Surgery};

/// Operating-room and nurse scheduling instance.
///
/// # Invariant
/// Every surgery's `incompatible_rooms` has exactly `num_rooms` entries
/// when added through [`with_surgery`](Self::with_surgery).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    /// Number of operating rooms.
    pub num_rooms: usize,
    /// Nurse shifts, indexed by nurse.
    pub nurses: Vec<NurseShift>,
    /// Surgeries, indexed by surgery.
    pub surgeries: Vec<Surgery>,
    /// Maximum span of duty for any nurse (minutes).
    pub max_shift_duration: i64,
}

impl Instance {
    /// Creates an instance with no nurses and no surgeries.
    pub fn new(num_rooms: usize, max_shift_duration: i64) -> Self {
        Self {
            num_rooms,
            nurses: Vec::new(),
            surgeries: Vec::new(),
            max_shift_duration,
        }
    }

    /// Adds a nurse.
    pub fn with_nurse(mut self, nurse: NurseShift) -> Self {
        self.nurses.push(nurse);
        self
    }

    /// Adds a surgery, fitting its room flags to `num_rooms`.
    pub fn with_surgery(mut self, mut surgery: Surgery) -> Self {
        surgery.incompatible_rooms.resize(self.num_rooms, false);
        self.surgeries.push(surgery);
        self
    }

    /// Number of nurses.
    #[inline]
    pub fn num_nurses(&self) -> usize {
        self.nurses.len()
    }

    /// Number of surgeries.
    #[inline]
    pub fn num_surgeries(&self) -> usize {
        self.surgeries.len()
    }

    /// Total nurse demand across all surgeries, saturating at `usize::MAX`.
    pub fn total_nurse_demand(&self) -> usize {
        self.surgeries
            .iter()
            .fold(0, |acc, s| acc.saturating_add(s.needed_nurses))
    }
}
