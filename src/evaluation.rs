//! Schedule evaluation.
//!
//! Scores a candidate [`SurgerySchedule`] as `makespan + penalties`.
//! Every constraint violation adds `penalty_weight * magnitude`, where the
//! magnitude is the size of the breach in minutes or headcount (1 for
//! flat faults). Checks never short-circuit each other, so a schedule with
//! several defects pays for all of them.
//!
//! # Checks
//!
//! | # | Constraint | Magnitude |
//! |---|-----------|-----------|
//! | 1 | per-surgery lists have `num_surgeries` entries | flat, plus flat per missing entry |
//! | 2 | `start >= min_start`, `end <= max_end`, `end - start == duration` | minutes |
//! | 3 | room in range and compatible | flat |
//! | 4 | no overlap between consecutive surgeries in a room | minutes |
//! | 5 | nurse list ordered by start, within shift, span <= max | flat / minutes |
//! | 6 | at least `needed_nurses` distinct nurses per surgery | headcount |
//!
//! Evaluation is total: malformed schedules (short lists, out-of-range
//! rooms or surgery indices) become violations, never panics. Magnitudes
//! are computed without `i64` overflow and saturate at `u64::MAX`.

use crate::config::EvaluatorConfig;
use crate::models::{excess, Evaluation, Instance, SurgerySchedule, Violation, ViolationKind};

/// Evaluates a schedule against an instance.
///
/// The schedule is not modified. Calling this twice on the same inputs
/// yields the same [`Evaluation`].
///
/// # Example
/// ```
/// use u_surgery::config::EvaluatorConfig;
/// use u_surgery::evaluation::evaluate;
/// use u_surgery::models::{Instance, NurseShift, Surgery, SurgerySchedule};
///
/// let instance = Instance::new(1, 480)
///     .with_nurse(NurseShift::new(0, 480))
///     .with_surgery(Surgery::new(0, 120, 60).with_needed_nurses(1));
/// let schedule = SurgerySchedule::new().with_surgery(0, 0, 60).with_nurse([0]);
///
/// let eval = evaluate(&instance, &schedule, &EvaluatorConfig::default());
/// assert!(eval.is_feasible());
/// assert_eq!(eval.score(), 60.0);
/// ```
pub fn evaluate(
    instance: &Instance,
    schedule: &SurgerySchedule,
    config: &EvaluatorConfig,
) -> Evaluation {
    let mut violations = Vec::new();

    check_structure(instance, schedule, &mut violations);
    check_windows(instance, schedule, &mut violations);
    check_rooms(instance, schedule, &mut violations);
    check_room_overlaps(instance, schedule, &mut violations);
    let valid_lists = check_nurse_shifts(instance, schedule, &mut violations);
    check_headcount(instance, &valid_lists, &mut violations);

    let penalty: f64 = violations
        .iter()
        .map(|v| config.penalty_weight * v.magnitude as f64)
        .sum();
    let makespan = schedule
        .makespan()
        .map_or(config.empty_makespan, |m| m as f64);

    for v in &violations {
        tracing::trace!(violation = %v, "constraint violated");
    }

    tracing::trace!(
        makespan,
        penalty,
        violations = violations.len(),
        "evaluated surgery schedule"
    );

    Evaluation {
        makespan,
        penalty,
        violations,
    }
}

/// Magnitude of a signed quantity, saturating at `u64::MAX`.
fn magnitude(value: i128) -> u64 {
    u64::try_from(value.unsigned_abs()).unwrap_or(u64::MAX)
}

fn check_structure(instance: &Instance, schedule: &SurgerySchedule, out: &mut Vec<Violation>) {
    let n = instance.num_surgeries();
    if schedule.surgery_room.len() != n
        || schedule.surgery_start.len() != n
        || schedule.surgery_end.len() != n
    {
        out.push(Violation::flat(ViolationKind::LengthMismatch, None));
    }

    for s in 0..n {
        if schedule.times(s).is_none() {
            out.push(Violation::flat(ViolationKind::MissingTimes, Some(s)));
        }
        if schedule.room(s).is_none() {
            out.push(Violation::flat(ViolationKind::MissingRoom, Some(s)));
        }
    }
}

fn check_windows(instance: &Instance, schedule: &SurgerySchedule, out: &mut Vec<Violation>) {
    for (s, surgery) in instance.surgeries.iter().enumerate() {
        let Some((start, end)) = schedule.times(s) else {
            continue;
        };

        let early = surgery.window.early_by(start);
        if early > 0 {
            out.push(Violation::new(ViolationKind::EarlyStart, Some(s), early));
        }
        let late = surgery.window.late_by(end);
        if late > 0 {
            out.push(Violation::new(ViolationKind::LateEnd, Some(s), late));
        }
        let actual = i128::from(end) - i128::from(start);
        let deviation = magnitude(actual - i128::from(surgery.duration));
        if deviation > 0 {
            out.push(Violation::new(
                ViolationKind::DurationMismatch,
                Some(s),
                deviation,
            ));
        }
    }
}

/// Room index of `surgery` if it is present and in range.
fn room_index(instance: &Instance, schedule: &SurgerySchedule, surgery: usize) -> Option<usize> {
    let room = usize::try_from(schedule.room(surgery)?).ok()?;
    (room < instance.num_rooms).then_some(room)
}

fn check_rooms(instance: &Instance, schedule: &SurgerySchedule, out: &mut Vec<Violation>) {
    for (s, surgery) in instance.surgeries.iter().enumerate() {
        if schedule.room(s).is_none() {
            continue;
        }
        match room_index(instance, schedule, s) {
            None => out.push(Violation::flat(ViolationKind::RoomOutOfRange, Some(s))),
            Some(r) if surgery.is_incompatible(r) => {
                out.push(Violation::flat(ViolationKind::IncompatibleRoom, Some(s)))
            }
            Some(_) => {}
        }
    }
}

fn check_room_overlaps(
    instance: &Instance,
    schedule: &SurgerySchedule,
    out: &mut Vec<Violation>,
) {
    // Per room: (start, end) in surgery index order
    let mut timelines: Vec<Vec<(i64, i64)>> = vec![Vec::new(); instance.num_rooms];
    for s in 0..instance.num_surgeries() {
        if let (Some(r), Some(times)) = (room_index(instance, schedule, s), schedule.times(s)) {
            timelines[r].push(times);
        }
    }

    for (r, timeline) in timelines.iter_mut().enumerate() {
        // Stable: equal starts keep surgery index order
        timeline.sort_by_key(|&(start, _)| start);
        for pair in timeline.windows(2) {
            let (_, prev_end) = pair[0];
            let (next_start, _) = pair[1];
            let overlap = excess(prev_end, next_start);
            if overlap > 0 {
                out.push(Violation::new(ViolationKind::RoomOverlap, Some(r), overlap));
            }
        }
    }
}

/// Checks every nurse's list and returns the lists with unusable entries dropped.
fn check_nurse_shifts(
    instance: &Instance,
    schedule: &SurgerySchedule,
    out: &mut Vec<Violation>,
) -> Vec<Vec<usize>> {
    let mut valid_lists = Vec::with_capacity(instance.num_nurses());

    for (n, shift) in instance.nurses.iter().enumerate() {
        let mut valid = Vec::new();
        for &s in schedule.assignment(n) {
            if s < instance.num_surgeries() && schedule.times(s).is_some() {
                valid.push(s);
            } else {
                out.push(Violation::flat(ViolationKind::UnknownSurgery, Some(n)));
            }
        }

        if let (Some(&first), Some(&last)) = (valid.first(), valid.last()) {
            let start_of = |s: usize| schedule.surgery_start[s];
            if valid.windows(2).any(|w| start_of(w[0]) > start_of(w[1])) {
                out.push(Violation::flat(ViolationKind::NurseOrder, Some(n)));
            }

            let first_start = start_of(first);
            let last_end = schedule.surgery_end[last];
            let early = shift.window.early_by(first_start);
            if early > 0 {
                out.push(Violation::new(ViolationKind::ShiftEarlyStart, Some(n), early));
            }
            let late = shift.window.late_by(last_end);
            if late > 0 {
                out.push(Violation::new(ViolationKind::ShiftLateEnd, Some(n), late));
            }
            let span = i128::from(last_end) - i128::from(first_start);
            let overrun = span - i128::from(instance.max_shift_duration);
            if overrun > 0 {
                out.push(Violation::new(
                    ViolationKind::ShiftTooLong,
                    Some(n),
                    magnitude(overrun),
                ));
            }
        }

        valid_lists.push(valid);
    }

    valid_lists
}

fn check_headcount(instance: &Instance, valid_lists: &[Vec<usize>], out: &mut Vec<Violation>) {
    let mut attending = vec![0usize; instance.num_surgeries()];
    // Last nurse counted per surgery, so repeats within one list count once
    let mut last_counted: Vec<Option<usize>> = vec![None; instance.num_surgeries()];

    for (n, list) in valid_lists.iter().enumerate() {
        for &s in list {
            if last_counted[s] != Some(n) {
                last_counted[s] = Some(n);
                attending[s] += 1;
            }
        }
    }

    for (s, surgery) in instance.surgeries.iter().enumerate() {
        if attending[s] < surgery.needed_nurses {
            let shortfall = surgery.needed_nurses - attending[s];
            out.push(Violation::new(
                ViolationKind::NurseShortfall,
                Some(s),
                u64::try_from(shortfall).unwrap_or(u64::MAX),
            ));
        }
    }
}
