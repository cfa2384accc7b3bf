//! MRW plan validity lock tests.
//!
//! Every plan returned by the search replays from the initial state with
//! each action applicable in turn, and ends in a goal state.

use lock_tests::scenario_helpers::policy;
use mcplan_harness::contract::PlanningWorldV1;
use mcplan_harness::worlds::gripper::Gripper;
use mcplan_harness::worlds::trapdoor::Trapdoor;
use mcplan_kernel::operators::apply::apply;
use mcplan_kernel::proof::replay::replay_verify;
use mcplan_search::heuristic::{BlindHeuristic, GoalCountHeuristic, StateHeuristic};
use mcplan_search::search::search;
use proptest::prelude::*;

fn assert_plan_replays(
    problem: &mcplan_kernel::problem::ProblemV1,
    heuristic: &dyn StateHeuristic,
    walk_count: u64,
    walk_length: u64,
    seed: u64,
) -> Result<(), TestCaseError> {
    let result = search(problem, heuristic, &policy(walk_count, walk_length, seed)).unwrap();
    prop_assert!(result.is_goal_reached(), "seed {seed} ran out of budget");
    let plan = result.plan.unwrap();

    // Step-by-step, independent of replay_verify.
    let mut state = problem.initial_state().clone();
    for action in plan.resolve(problem) {
        state = apply(&state, action).map_err(|e| TestCaseError::fail(e.to_string()))?;
    }
    prop_assert!(problem.is_goal(&state));

    let end = replay_verify(problem, plan.action_indices())
        .map_err(|e| TestCaseError::fail(e.to_string()))?;
    prop_assert_eq!(end, state);

    let node = result.goal_node.unwrap();
    prop_assert_eq!(u64::from(node.depth()), plan.len() as u64);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn gripper_plans_replay(seed in any::<u64>(), walk_length in 3u64..12) {
        let problem = Gripper::new(2).build().unwrap();
        assert_plan_replays(&problem, &GoalCountHeuristic, 16, walk_length, seed)?;
    }

    #[test]
    fn trapdoor_plans_replay(seed in any::<u64>(), walk_count in 1u64..20) {
        let problem = Trapdoor.build().unwrap();
        assert_plan_replays(&problem, &GoalCountHeuristic, walk_count, 5, seed)?;
    }

    #[test]
    fn blind_search_plans_replay(seed in any::<u64>()) {
        let problem = Gripper::new(1).build().unwrap();
        assert_plan_replays(&problem, &BlindHeuristic, 8, 6, seed)?;
    }
}
