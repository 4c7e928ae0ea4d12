//! Schedule (candidate solution) model.
//!
//! A schedule assigns every surgery a room and a time interval, and every
//! nurse an ordered list of surgeries. Schedules come from the generator
//! or from an external search driver and may be arbitrarily malformed;
//! the evaluator turns every defect into a [`Violation`].
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};
use std::fmt;

/// A candidate schedule.
///
/// Missing fields deserialize as empty lists, so a partial JSON candidate
/// still decodes and is then penalized rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurgerySchedule {
    /// Room per surgery. Signed so that negative indices can be represented.
    pub surgery_room: Vec<i64>,
    /// Start time per surgery (minutes).
    pub surgery_start: Vec<i64>,
    /// End time per surgery (minutes).
    pub surgery_end: Vec<i64>,
    /// Per nurse, the surgeries worked in the order they are worked.
    pub nurse_assignment: Vec<Vec<usize>>,
}

impl SurgerySchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a surgery placement (room, start, end).
    pub fn with_surgery(mut self, room: i64, start: i64, end: i64) -> Self {
        self.surgery_room.push(room);
        self.surgery_start.push(start);
        self.surgery_end.push(end);
        self
    }

    /// Appends the next nurse's ordered surgery list.
    pub fn with_nurse<I>(mut self, surgeries: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        self.nurse_assignment.push(surgeries.into_iter().collect());
        self
    }

    /// Start and end of `surgery`, if both are present.
    #[inline]
    pub fn times(&self, surgery: usize) -> Option<(i64, i64)> {
        Some((
            *self.surgery_start.get(surgery)?,
            *self.surgery_end.get(surgery)?,
        ))
    }

    /// Assigned room of `surgery`, if present.
    #[inline]
    pub fn room(&self, surgery: usize) -> Option<i64> {
        self.surgery_room.get(surgery).copied()
    }

    /// Ordered surgery list of `nurse` (empty if absent).
    pub fn assignment(&self, nurse: usize) -> &[usize] {
        self.nurse_assignment
            .get(nurse)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Latest end time across all surgeries, `None` if there are none.
    pub fn makespan(&self) -> Option<i64> {
        self.surgery_end.iter().copied().max()
    }
}

/// Classification of constraint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationKind {
    /// A per-surgery list does not have one entry per surgery.
    LengthMismatch,
    /// Start or end time of a surgery is missing.
    MissingTimes,
    /// Room of a surgery is missing.
    MissingRoom,
    /// Surgery starts before its window.
    EarlyStart,
    /// Surgery ends after its window.
    LateEnd,
    /// `end - start` differs from the surgery duration.
    DurationMismatch,
    /// Room index is negative or not below the room count.
    RoomOutOfRange,
    /// Surgery placed in a room it is incompatible with.
    IncompatibleRoom,
    /// Two consecutive surgeries in a room overlap.
    RoomOverlap,
    /// A nurse lists a surgery that does not exist or has no times.
    UnknownSurgery,
    /// A nurse's list is not in non-decreasing start order.
    NurseOrder,
    /// A nurse's first surgery starts before the shift.
    ShiftEarlyStart,
    /// A nurse's last surgery ends after the shift.
    ShiftLateEnd,
    /// A nurse's span of duty exceeds the maximum shift duration.
    ShiftTooLong,
    /// A surgery is attended by fewer nurses than required.
    NurseShortfall,
}

/// A constraint violation found in a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub kind: ViolationKind,
    /// Surgery, nurse, or room index the violation concerns.
    pub entity: Option<usize>,
    /// Severity in minutes or headcount; flat faults use 1.
    pub magnitude: u64,
}

impl Violation {
    /// Creates a violation of the given magnitude.
    pub fn new(kind: ViolationKind, entity: Option<usize>, magnitude: u64) -> Self {
        Self {
            kind,
            entity,
            magnitude,
        }
    }

    /// Creates a flat (magnitude 1) violation.
    pub fn flat(kind: ViolationKind, entity: Option<usize>) -> Self {
        Self::new(kind, entity, 1)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.entity {
            Some(e) => write!(f, "{:?}[{}] x{}", self.kind, e, self.magnitude),
            None => write!(f, "{:?} x{}", self.kind, self.magnitude),
        }
    }
}

/// Scored result of evaluating a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Objective term: makespan, or the empty-schedule sentinel.
    pub makespan: f64,
    /// Sum of all violation penalties.
    pub penalty: f64,
    /// Every violation found, in check order.
    pub violations: Vec<Violation>,
}

impl Evaluation {
    /// Final score: makespan plus penalties. Lower is better.
    #[inline]
    pub fn score(&self) -> f64 {
        self.makespan + self.penalty
    }

    /// Whether no constraint is violated.
    pub fn is_feasible(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of violations of `kind`.
    pub fn count(&self, kind: ViolationKind) -> usize {
        self.violations.iter().filter(|v| v.kind == kind).count()
    }

    /// Summed magnitude of violations of `kind`, saturating at `u64::MAX`.
    pub fn magnitude_of(&self, kind: ViolationKind) -> u64 {
        self.violations
            .iter()
            .filter(|v| v.kind == kind)
            .fold(0u64, |acc, v| acc.saturating_add(v.magnitude))
    }
}
