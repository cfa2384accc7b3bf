//! MRW restart lock tests, driven one iteration at a time.
//!
//! - MRW-RESTART-DEAD-END: a dead-end current node is replaced by a fresh
//!   root; the counter resets and `h_min` is kept.
//! - MRW-RESTART-STALL: `max_steps` non-improving iterations force a restart.
//! - MRW-MONOTONE-HMIN: the best-ever estimate never increases.

use lock_tests::scenario_helpers::{loop_problem, pit_problem, policy};
use mcplan_harness::contract::PlanningWorldV1;
use mcplan_harness::worlds::gripper::Gripper;
use mcplan_harness::worlds::trapdoor::Trapdoor;
use mcplan_search::heuristic::GoalCountHeuristic;
use mcplan_search::policy::MrwPolicyV1;
use mcplan_search::search::{IterationReportV1, LoopStepV1, MonteCarloSearch, RestartCauseV1};

fn iterate(mc: &mut MonteCarloSearch<'_>) -> IterationReportV1 {
    match mc.step() {
        LoopStepV1::Iterated(report) => report,
        LoopStepV1::GoalReached => panic!("goal is unreachable in this fixture"),
    }
}

// ---------------------------------------------------------------------------
// MRW-RESTART-DEAD-END
// ---------------------------------------------------------------------------

#[test]
fn dead_end_restarts_from_fresh_root() {
    let problem = pit_problem();
    let policy = policy(1, 2, 0);
    let mut mc = MonteCarloSearch::new(&problem, &GoalCountHeuristic, &policy).unwrap();
    let h_start = mc.h_min();

    // Iteration 1: the root has `fall`; the walk lands in the pit.
    let first = iterate(&mut mc);
    assert_eq!(first.restart, None);
    assert_eq!(first.walk_start_depth, 0);
    assert!(!first.improved);
    assert_eq!(mc.current().depth(), 1);
    assert_eq!(mc.counter(), 1);

    // Iteration 2: the pit is a dead end.
    let second = iterate(&mut mc);
    assert_eq!(second.restart, Some(RestartCauseV1::DeadEnd));
    assert_eq!(second.walk_start_depth, 0);
    // Reset to 0, then one more non-improving walk.
    assert_eq!(second.counter, 1);
    assert!((second.h_min - h_start).abs() < f64::EPSILON);
    assert_eq!(mc.stats().restarts_dead_end, 1);
}

#[test]
fn trapdoor_pit_never_survives_two_iterations() {
    let problem = Trapdoor.build().unwrap();
    let pit = problem.facts().get("in pit").unwrap();
    let policy = policy(1, 2, 5);
    let mut mc = MonteCarloSearch::new(&problem, &GoalCountHeuristic, &policy).unwrap();

    let mut in_pit = false;
    for _ in 0..200 {
        let LoopStepV1::Iterated(report) = mc.step() else {
            break;
        };
        if in_pit {
            // A stall restart may pre-empt the dead-end check; either way the
            // walk starts from a fresh root.
            assert!(report.restart.is_some());
            assert_eq!(report.walk_start_depth, 0);
        }
        in_pit = mc.current().state().holds(pit);
    }
}

// ---------------------------------------------------------------------------
// MRW-RESTART-STALL
// ---------------------------------------------------------------------------

#[test]
fn stall_restarts_after_max_steps() {
    let problem = loop_problem();
    let policy = MrwPolicyV1 {
        max_steps: 3,
        ..policy(2, 3, 0)
    };
    let mut mc = MonteCarloSearch::new(&problem, &GoalCountHeuristic, &policy).unwrap();

    for expected_counter in 1..=3 {
        let report = iterate(&mut mc);
        assert_eq!(report.restart, None);
        assert_eq!(report.counter, expected_counter);
    }
    assert!(mc.current().depth() > 0);

    let report = iterate(&mut mc);
    assert_eq!(report.restart, Some(RestartCauseV1::Stalled));
    assert_eq!(report.walk_start_depth, 0);
    assert_eq!(report.counter, 1);
    assert_eq!(mc.stats().restarts_stalled, 1);
    assert_eq!(mc.stats().restarts_dead_end, 0);
}

// ---------------------------------------------------------------------------
// MRW-MONOTONE-HMIN
// ---------------------------------------------------------------------------

#[test]
fn h_min_is_non_increasing() {
    let problem = Gripper::new(4).build().unwrap();
    for seed in 0..8 {
        let policy = policy(4, 4, seed);
        let mut mc = MonteCarloSearch::new(&problem, &GoalCountHeuristic, &policy).unwrap();
        let mut previous = mc.h_min();

        for _ in 0..300 {
            let LoopStepV1::Iterated(report) = mc.step() else {
                break;
            };
            assert!(report.h_min <= previous, "seed {seed}: h_min rose");
            if report.improved {
                assert!(report.h_min < previous);
                assert_eq!(report.counter, 0);
            } else {
                assert!((report.h_min - previous).abs() < f64::EPSILON);
            }
            previous = report.h_min;
        }
        assert!((mc.stats().h_min - mc.h_min()).abs() < f64::EPSILON);
    }
}
