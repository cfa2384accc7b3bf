//! MRW determinism lock tests.
//!
//! - MRW-DETERMINISM-INPROC: fixed seed and tunables give identical plans.
//! - MRW-PARALLEL-EQUIV: parallel batches equal sequential batches.

use lock_tests::scenario_helpers::policy;
use mcplan_harness::contract::PlanningWorldV1;
use mcplan_harness::runner::run_world;
use mcplan_harness::worlds::gripper::Gripper;
use mcplan_harness::worlds::trapdoor::Trapdoor;
use mcplan_search::policy::MrwPolicyV1;

// ---------------------------------------------------------------------------
// MRW-DETERMINISM-INPROC
// ---------------------------------------------------------------------------

#[test]
fn same_seed_same_plan_n10() {
    let world = Gripper::new(3);
    let policy = policy(32, 10, 42);
    let first = run_world(&world, &policy).unwrap().report;
    assert!(first.is_solved());

    for i in 1..=10 {
        let again = run_world(&world, &policy).unwrap().report;
        assert_eq!(again.plan_digest, first.plan_digest, "run {i} diverged");
        assert_eq!(again.plan, first.plan, "run {i} diverged");
        assert_eq!(again.stats, first.stats, "run {i} diverged");
    }
}

#[test]
fn different_seeds_each_produce_a_plan() {
    let world = Gripper::new(2);
    let digests: Vec<_> = (0..6)
        .map(|seed| {
            let report = run_world(&world, &policy(16, 10, seed)).unwrap().report;
            report.plan_digest.expect("gripper-2 is solvable")
        })
        .collect();
    assert!(digests.iter().all(|d| d.starts_with("sha256:")));
}

// ---------------------------------------------------------------------------
// MRW-PARALLEL-EQUIV
// ---------------------------------------------------------------------------

fn assert_parallel_matches_sequential(world: &dyn PlanningWorldV1, base: &MrwPolicyV1) {
    let sequential = run_world(
        world,
        &MrwPolicyV1 {
            parallel_walks: false,
            ..base.clone()
        },
    )
    .unwrap()
    .report;
    let parallel = run_world(
        world,
        &MrwPolicyV1 {
            parallel_walks: true,
            ..base.clone()
        },
    )
    .unwrap()
    .report;

    assert_eq!(parallel.termination, sequential.termination);
    assert_eq!(parallel.plan, sequential.plan);
    assert_eq!(parallel.plan_digest, sequential.plan_digest);
    assert_eq!(parallel.stats, sequential.stats);
}

#[test]
fn parallel_equals_sequential_gripper() {
    for seed in [0, 7, 1234] {
        assert_parallel_matches_sequential(&Gripper::new(4), &policy(48, 10, seed));
    }
}

#[test]
fn parallel_equals_sequential_trapdoor() {
    for seed in 0..4 {
        assert_parallel_matches_sequential(&Trapdoor, &policy(8, 3, seed));
    }
}
