//! Random schedule generation.
//!
//! Produces structurally complete schedules for search initialization.
//! Generated schedules always have one room/start/end per surgery, exact
//! durations, windows respected whenever the window has slack, and nurse
//! lists sorted by start. Room compatibility, room overlaps, shifts, and
//! headcount are left for the search to repair.

use rand::seq::index;
use rand::Rng;

use crate::models::{Instance, SurgerySchedule};

/// Generates a random schedule for `instance`.
///
/// Per surgery:
/// - Room drawn uniformly from all rooms, ignoring incompatibility
///   (room 0 if the instance has no rooms).
/// - Start drawn uniformly from `[min_start, max_end - duration]`, or
///   `min_start` when the window is shorter than the duration (the
///   resulting late end is left for the evaluator to penalize).
/// - `end = start + duration`, saturating at `i64::MAX`.
/// - `needed_nurses` distinct nurses drawn without replacement, or every
///   nurse when demand exceeds staff.
///
/// Each nurse's list is finally sorted by start time (stable).
pub fn random_solution<R: Rng>(instance: &Instance, rng: &mut R) -> SurgerySchedule {
    let n = instance.num_surgeries();
    let num_nurses = instance.num_nurses();
    let mut schedule = SurgerySchedule {
        surgery_room: Vec::with_capacity(n),
        surgery_start: Vec::with_capacity(n),
        surgery_end: Vec::with_capacity(n),
        nurse_assignment: vec![Vec::new(); num_nurses],
    };

    for (s, surgery) in instance.surgeries.iter().enumerate() {
        let room = if instance.num_rooms == 0 {
            0
        } else {
            rng.random_range(0..instance.num_rooms)
        };
        let start = match surgery.latest_start() {
            Some(latest) => rng.random_range(surgery.min_start()..=latest),
            None => surgery.min_start(),
        };
        schedule.surgery_room.push(room as i64);
        schedule.surgery_start.push(start);
        schedule.surgery_end.push(start.saturating_add(surgery.duration));

        if surgery.needed_nurses > num_nurses {
            for list in &mut schedule.nurse_assignment {
                list.push(s);
            }
        } else {
            for nurse in index::sample(rng, num_nurses, surgery.needed_nurses) {
                schedule.nurse_assignment[nurse].push(s);
            }
        }
    }

    let starts = &schedule.surgery_start;
    for list in &mut schedule.nurse_assignment {
        list.sort_by_key(|&s| starts[s]);
    }

    tracing::trace!(surgeries = n, nurses = num_nurses, "sampled surgery schedule");
    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EvaluatorConfig;
    use crate::evaluation::evaluate;
    use crate::models::{NurseShift, Surgery, ViolationKind};
    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn sample_instance() -> Instance {
        Instance::new(3, 480)
            .with_nurse(NurseShift::new(0, 720))
            .with_nurse(NurseShift::new(0, 720))
            .with_nurse(NurseShift::new(120, 840))
            .with_surgery(Surgery::new(0, 240, 90).with_needed_nurses(2))
            .with_surgery(Surgery::new(60, 300, 120).with_needed_nurses(1))
            .with_surgery(Surgery::new(120, 600, 60).with_needed_nurses(3))
            .with_surgery(Surgery::new(300, 420, 45))
    }

    fn assert_structurally_valid(instance: &Instance, sched: &SurgerySchedule) {
        let n = instance.num_surgeries();
        assert_eq!(sched.surgery_room.len(), n);
        assert_eq!(sched.surgery_start.len(), n);
        assert_eq!(sched.surgery_end.len(), n);
        assert_eq!(sched.nurse_assignment.len(), instance.num_nurses());

        for (s, surgery) in instance.surgeries.iter().enumerate() {
            assert_eq!(sched.surgery_end[s] - sched.surgery_start[s], surgery.duration);
        }
        for list in &sched.nurse_assignment {
            assert!(list
                .windows(2)
                .all(|w| sched.surgery_start[w[0]] <= sched.surgery_start[w[1]]));
        }
    }

    #[test]
    fn test_structure() {
        let inst = sample_instance();
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..50 {
            let sched = random_solution(&inst, &mut rng);
            assert_structurally_valid(&inst, &sched);
        }
    }

    #[test]
    fn test_windows_respected() {
        let inst = sample_instance();
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            let sched = random_solution(&inst, &mut rng);
            for (s, surgery) in inst.surgeries.iter().enumerate() {
                assert_eq!(surgery.window.early_by(sched.surgery_start[s]), 0);
                assert_eq!(surgery.window.late_by(sched.surgery_end[s]), 0);
                let room = sched.surgery_room[s];
                assert!((0..3).contains(&room));
            }
            let eval = evaluate(&inst, &sched, &EvaluatorConfig::default());
            assert_eq!(eval.count(ViolationKind::EarlyStart), 0);
            assert_eq!(eval.count(ViolationKind::LateEnd), 0);
            assert_eq!(eval.count(ViolationKind::DurationMismatch), 0);
            assert_eq!(eval.count(ViolationKind::RoomOutOfRange), 0);
            assert_eq!(eval.count(ViolationKind::NurseOrder), 0);
        }
    }

    #[test]
    fn test_headcount_met_with_distinct_nurses() {
        let inst = sample_instance();
        let mut rng = SmallRng::seed_from_u64(3);
        let sched = random_solution(&inst, &mut rng);
        for (s, surgery) in inst.surgeries.iter().enumerate() {
            let attending = sched
                .nurse_assignment
                .iter()
                .filter(|list| list.contains(&s))
                .count();
            assert_eq!(attending, surgery.needed_nurses);
        }
        for list in &sched.nurse_assignment {
            let mut dedup = list.clone();
            dedup.sort_unstable();
            dedup.dedup();
            assert_eq!(dedup.len(), list.len());
        }
    }

    #[test]
    fn test_no_slack_clamps_to_min_start() {
        let inst = Instance::new(1, 480)
            .with_nurse(NurseShift::new(0, 480))
            .with_surgery(Surgery::new(60, 90, 60));
        let mut rng = SmallRng::seed_from_u64(1);
        let sched = random_solution(&inst, &mut rng);
        assert_eq!(sched.surgery_start, vec![60]);
        assert_eq!(sched.surgery_end, vec![120]);

        let eval = evaluate(&inst, &sched, &EvaluatorConfig::default());
        assert_eq!(eval.magnitude_of(ViolationKind::LateEnd), 30);
    }

    #[test]
    fn test_demand_exceeding_staff_assigns_everyone() {
        let inst = Instance::new(1, 480)
            .with_nurse(NurseShift::new(0, 480))
            .with_nurse(NurseShift::new(0, 480))
            .with_surgery(Surgery::new(0, 120, 60).with_needed_nurses(5));
        let mut rng = SmallRng::seed_from_u64(9);
        let sched = random_solution(&inst, &mut rng);
        assert_eq!(sched.nurse_assignment, vec![vec![0], vec![0]]);
    }

    #[test]
    fn test_zero_rooms_does_not_panic() {
        let inst = Instance::new(0, 480).with_surgery(Surgery::new(0, 120, 60));
        let mut rng = SmallRng::seed_from_u64(5);
        let sched = random_solution(&inst, &mut rng);
        assert_eq!(sched.surgery_room, vec![0]);
        let eval = evaluate(&inst, &sched, &EvaluatorConfig::default());
        assert_eq!(eval.count(ViolationKind::RoomOutOfRange), 1);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let inst = sample_instance();
        let a = random_solution(&inst, &mut SmallRng::seed_from_u64(11));
        let b = random_solution(&inst, &mut SmallRng::seed_from_u64(11));
        assert_eq!(a, b);
    }

    #[test]
    fn test_extreme_duration_does_not_panic() {
        let text = "1 1 1\n0\n2\n9223372036854775807\n1\n0\n8\n8\n0\n";
        let inst: Instance = text.parse().unwrap();
        let mut rng = SmallRng::seed_from_u64(13);
        let sched = random_solution(&inst, &mut rng);
        assert_eq!(sched.surgery_start, vec![0]);
        assert_eq!(sched.surgery_end, vec![i64::MAX]);

        let eval = evaluate(&inst, &sched, &EvaluatorConfig::default());
        assert_eq!(
            eval.magnitude_of(ViolationKind::LateEnd),
            (i64::MAX - 120) as u64
        );
        assert_eq!(eval.count(ViolationKind::DurationMismatch), 0);
        assert!(eval.score().is_finite());
    }

    fn arb_instance() -> impl Strategy<Value = Instance> {
        let surgery = (
            0i64..600,
            0i64..600,
            1i64..300,
            0usize..6,
            prop::collection::vec(any::<bool>(), 4),
        );
        (
            1usize..4,
            prop::collection::vec((0i64..600, 0i64..600), 1..6),
            prop::collection::vec(surgery, 0..12),
        )
            .prop_map(|(rooms, shifts, surgeries)| {
                let mut inst = Instance::new(rooms, 480);
                for (a, b) in shifts {
                    inst = inst.with_nurse(NurseShift::new(a.min(b), a.max(b)));
                }
                for (a, b, duration, needed, flags) in surgeries {
                    inst = inst.with_surgery(
                        Surgery::new(a.min(b), a.max(b), duration)
                            .with_needed_nurses(needed)
                            .with_incompatible_rooms(flags),
                    );
                }
                inst
            })
    }

    proptest! {
        #[test]
        fn prop_random_solution_is_structurally_valid(
            inst in arb_instance(),
            seed in any::<u64>(),
        ) {
            let sched = random_solution(&inst, &mut SmallRng::seed_from_u64(seed));
            assert_structurally_valid(&inst, &sched);

            let eval = evaluate(&inst, &sched, &EvaluatorConfig::default());
            prop_assert!(eval.score().is_finite());
            prop_assert_eq!(eval.count(ViolationKind::LengthMismatch), 0);
            prop_assert_eq!(eval.count(ViolationKind::DurationMismatch), 0);
            prop_assert_eq!(eval.count(ViolationKind::NurseOrder), 0);
        }
    }
}
