//! MRW scenario lock tests.
//!
//! - MRW-TRIVIAL: a satisfied initial state yields the empty plan.
//! - MRW-MAKE-Q: the two-fact problem yields `[make_q]` for every seed.
//! - MRW-STRANDED: zero actions and an unsatisfied goal end on the budget.

use std::time::Duration;

use lock_tests::scenario_helpers::{
    policy, policy_with_iterations, policy_with_wall_time, satisfied_problem,
};
use mcplan_harness::contract::PlanningWorldV1;
use mcplan_harness::worlds::stranded::Stranded;
use mcplan_harness::worlds::two_fact::TwoFact;
use mcplan_search::heuristic::GoalCountHeuristic;
use mcplan_search::search::{search, TerminationReasonV1};

// ---------------------------------------------------------------------------
// MRW-TRIVIAL
// ---------------------------------------------------------------------------

#[test]
fn satisfied_root_returns_empty_plan_without_walking() {
    let problem = satisfied_problem();
    let result = search(&problem, &GoalCountHeuristic, &policy(10, 2, 0)).unwrap();

    assert_eq!(result.termination, TerminationReasonV1::GoalReached);
    let plan = result.plan.expect("goal reached implies a plan");
    assert!(plan.is_empty());
    assert_eq!(result.stats.iterations, 0);
    assert_eq!(result.stats.walk_attempts, 0);
    assert!(result.goal_node.is_some_and(|n| n.is_root()));
}

// ---------------------------------------------------------------------------
// MRW-MAKE-Q
// ---------------------------------------------------------------------------

#[test]
fn two_fact_yields_make_q_for_every_seed() {
    let problem = TwoFact.build().unwrap();
    for seed in 0..64 {
        let result = search(&problem, &GoalCountHeuristic, &policy(10, 2, seed)).unwrap();
        assert_eq!(result.termination, TerminationReasonV1::GoalReached, "seed {seed}");
        let plan = result.plan.unwrap();
        assert_eq!(plan.action_names(&problem), vec!["make_q"], "seed {seed}");
        assert_eq!(result.stats.iterations, 1, "seed {seed}");
        // The first attempt reaches the goal; the rest of the batch is skipped.
        assert_eq!(result.stats.walk_attempts, 1, "seed {seed}");
    }
}

#[test]
fn two_fact_goal_node_carries_cost_and_depth() {
    let problem = TwoFact.build().unwrap();
    let result = search(&problem, &GoalCountHeuristic, &policy(10, 2, 3)).unwrap();
    let node = result.goal_node.unwrap();
    assert_eq!(node.depth(), 1);
    assert_eq!(node.cost(), 1);
    assert_eq!(node.action_index(), Some(0));
    assert!(node.heuristic().abs() < f64::EPSILON);
}

// ---------------------------------------------------------------------------
// MRW-STRANDED
// ---------------------------------------------------------------------------

#[test]
fn stranded_halts_on_iteration_budget() {
    let problem = Stranded.build().unwrap();
    let result = search(
        &problem,
        &GoalCountHeuristic,
        &policy_with_iterations(10, 2, 0, 25),
    )
    .unwrap();

    assert_eq!(
        result.termination,
        TerminationReasonV1::IterationBudgetExhausted { iterations: 25 }
    );
    assert!(result.plan.is_none());
    assert!(result.goal_node.is_none());
    // Every iteration finds the root dead and restarts before walking.
    assert_eq!(result.stats.restarts_dead_end, 25);
    assert_eq!(result.stats.restarts_stalled, 0);
    assert_eq!(result.stats.nodes_generated, 0);
    assert_eq!(result.stats.dead_end_attempts, 25 * 10);
}

#[test]
fn stranded_halts_on_wall_clock_budget() {
    let problem = Stranded.build().unwrap();
    let limit = Duration::from_millis(30);
    let result = search(
        &problem,
        &GoalCountHeuristic,
        &policy_with_wall_time(4, 2, limit),
    )
    .unwrap();

    match result.termination {
        TerminationReasonV1::TimeBudgetExhausted { elapsed } => assert!(elapsed >= limit),
        other => panic!("expected TimeBudgetExhausted, got {other:?}"),
    }
    assert!(result.plan.is_none());
    assert!(result.stats.iterations > 0);
    assert_eq!(result.stats.restarts_dead_end, result.stats.iterations);
}
