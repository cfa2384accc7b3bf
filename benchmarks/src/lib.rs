//! Shared helpers for mcplan benchmark suites.

use std::sync::Arc;

use mcplan_harness::contract::PlanningWorldV1;
use mcplan_harness::worlds::gripper::Gripper;
use mcplan_kernel::problem::ProblemV1;
use mcplan_search::heuristic::StateHeuristic;
use mcplan_search::node::SearchNodeV1;
use mcplan_search::policy::MrwPolicyV1;

/// Ground a gripper instance.
///
/// # Panics
///
/// Panics if the world fails to ground. Benchmark setup failures are fatal.
#[must_use]
pub fn gripper(balls: usize) -> ProblemV1 {
    Gripper::new(balls).build().expect("gripper grounds")
}

/// Root node of `problem` under `heuristic`.
#[must_use]
pub fn root_node(problem: &ProblemV1, heuristic: &dyn StateHeuristic) -> Arc<SearchNodeV1> {
    let state = problem.initial_state().clone();
    let h = heuristic.estimate(&state, problem.goal());
    SearchNodeV1::root(state, h)
}

/// Policy for batch and search benchmarks.
#[must_use]
pub fn bench_policy(walk_count: u64, parallel_walks: bool) -> MrwPolicyV1 {
    MrwPolicyV1 {
        walk_count,
        parallel_walks,
        seed: 17,
        ..MrwPolicyV1::default()
    }
}
