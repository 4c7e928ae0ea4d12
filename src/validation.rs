//! Input validation for surgery scheduling instances.
//!
//! Checks structural integrity and obvious infeasibility of an instance
//! before it is handed to a search driver. Detects:
//! - Zero rooms, nurses, or surgeries
//! - Inverted surgery windows and shifts
//! - Non-positive durations and windows too short for the duration
//! - Surgeries with no compatible room, or mis-sized room flag vectors
//! - Nurse demand exceeding the nurse count
//!
//! Validation is advisory. An instance that fails it can still be loaded
//! and evaluated; its schedules simply cannot reach zero penalty.

use crate::models::Instance;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The instance has no rooms, nurses, or surgeries.
    EmptyDimension,
    /// A surgery window ends before it starts.
    InvalidWindow,
    /// A surgery duration is zero or negative.
    NonPositiveDuration,
    /// A surgery cannot fit its window.
    InsufficientSlack,
    /// Every room is incompatible with a surgery.
    NoCompatibleRoom,
    /// A surgery's incompatibility vector does not have one flag per room.
    RoomFlagsLength,
    /// A surgery needs more nurses than exist.
    NurseDemandExceedsStaff,
    /// A nurse shift ends before it starts.
    InvalidShift,
    /// The maximum shift duration is negative.
    NegativeShiftDuration,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a surgery scheduling instance.
///
/// Checks:
/// 1. At least one room, nurse, and surgery
/// 2. Every surgery window satisfies `min_start <= max_end`
/// 3. Every duration is positive and fits its window
/// 4. Every surgery has one flag per room and at least one compatible room
/// 5. No surgery needs more nurses than the instance has
/// 6. Every shift satisfies `earliest_start <= latest_end`
/// 7. The maximum shift duration is non-negative
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_instance(instance: &Instance) -> ValidationResult {
    let mut errors = Vec::new();

    for (what, n) in [
        ("rooms", instance.num_rooms),
        ("nurses", instance.num_nurses()),
        ("surgeries", instance.num_surgeries()),
    ] {
        if n == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyDimension,
                format!("Instance has no {what}"),
            ));
        }
    }

    for (s, surgery) in instance.surgeries.iter().enumerate() {
        if surgery.window.length() < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWindow,
                format!(
                    "Surgery {s} window [{}, {}] ends before it starts",
                    surgery.min_start(),
                    surgery.max_end()
                ),
            ));
        }

        if surgery.duration <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveDuration,
                format!("Surgery {s} has duration {}", surgery.duration),
            ));
        } else if surgery.window.length() >= 0 && surgery.latest_start().is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InsufficientSlack,
                format!(
                    "Surgery {s} needs {} min but its window is {} min",
                    surgery.duration,
                    surgery.window.length()
                ),
            ));
        }

        if surgery.incompatible_rooms.len() != instance.num_rooms {
            errors.push(ValidationError::new(
                ValidationErrorKind::RoomFlagsLength,
                format!(
                    "Surgery {s} has {} room flags for {} rooms",
                    surgery.incompatible_rooms.len(),
                    instance.num_rooms
                ),
            ));
        }

        if instance.num_rooms > 0 && !surgery.has_compatible_room(instance.num_rooms) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoCompatibleRoom,
                format!("Surgery {s} is incompatible with every room"),
            ));
        }

        if surgery.needed_nurses > instance.num_nurses() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NurseDemandExceedsStaff,
                format!(
                    "Surgery {s} needs {} nurses but only {} exist",
                    surgery.needed_nurses,
                    instance.num_nurses()
                ),
            ));
        }
    }

    for (n, nurse) in instance.nurses.iter().enumerate() {
        if nurse.window.length() < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidShift,
                format!(
                    "Nurse {n} shift [{}, {}] ends before it starts",
                    nurse.earliest_start(),
                    nurse.latest_end()
                ),
            ));
        }
    }

    if instance.max_shift_duration < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeShiftDuration,
            format!(
                "Maximum shift duration {} is negative",
                instance.max_shift_duration
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
