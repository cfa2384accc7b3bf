//! MRW pre-flight lock tests.
//!
//! Invalid tunables and unsupported problems are rejected before any walk.

use std::time::Duration;

use lock_tests::scenario_helpers::{numeric_problem, policy};
use mcplan_harness::contract::PlanningWorldV1;
use mcplan_harness::runner::{run_planner, RunError};
use mcplan_harness::worlds::two_fact::TwoFact;
use mcplan_kernel::problem::requirement::RequirementV1;
use mcplan_search::error::SearchError;
use mcplan_search::heuristic::GoalCountHeuristic;
use mcplan_search::policy::{MrwPolicyV1, SearchBudgetV1};
use mcplan_search::search::{search, MonteCarloSearch};

#[test]
fn unsupported_requirements_are_listed() {
    let problem = numeric_problem();
    let err = search(&problem, &GoalCountHeuristic, &policy(10, 5, 0)).unwrap_err();
    assert_eq!(
        err,
        SearchError::UnsupportedProblem {
            requirements: vec![RequirementV1::NumericFluents]
        }
    );
    assert!(err.to_string().contains(":numeric-fluents"));
}

#[test]
fn unsupported_problem_rejected_by_runner() {
    let err = run_planner(&numeric_problem(), &MrwPolicyV1::default()).unwrap_err();
    assert!(matches!(
        err,
        RunError::Search(SearchError::UnsupportedProblem { .. })
    ));
}

#[test]
fn invalid_tunables_are_rejected() {
    let problem = TwoFact.build().unwrap();
    let base = policy(10, 5, 0);
    let cases = [
        ("zero weight", MrwPolicyV1 { heuristic_weight: 0.0, ..base.clone() }),
        ("negative weight", MrwPolicyV1 { heuristic_weight: -2.0, ..base.clone() }),
        ("nan weight", MrwPolicyV1 { heuristic_weight: f64::NAN, ..base.clone() }),
        ("infinite weight", MrwPolicyV1 { heuristic_weight: f64::INFINITY, ..base.clone() }),
        ("no walks", MrwPolicyV1 { walk_count: 0, ..base.clone() }),
        ("length 0", MrwPolicyV1 { walk_length: 0, ..base.clone() }),
        ("length 1", MrwPolicyV1 { walk_length: 1, ..base.clone() }),
        ("no stall budget", MrwPolicyV1 { max_steps: 0, ..base.clone() }),
        (
            "unbounded",
            MrwPolicyV1 {
                budget: SearchBudgetV1 { max_iterations: None, max_wall_time: None },
                ..base.clone()
            },
        ),
        (
            "zero iterations",
            MrwPolicyV1 {
                budget: SearchBudgetV1 { max_iterations: Some(0), max_wall_time: None },
                ..base.clone()
            },
        ),
        (
            "zero wall time",
            MrwPolicyV1 {
                budget: SearchBudgetV1 { max_iterations: None, max_wall_time: Some(Duration::ZERO) },
                ..base.clone()
            },
        ),
    ];

    for (label, policy) in &cases {
        let err = MonteCarloSearch::new(&problem, &GoalCountHeuristic, policy)
            .err()
            .unwrap_or_else(|| panic!("{label}: accepted"));
        assert!(
            matches!(err, SearchError::InvalidConfiguration { .. }),
            "{label}: got {err:?}"
        );
    }
}

#[test]
fn minimal_valid_tunables_are_accepted() {
    let problem = TwoFact.build().unwrap();
    let policy = MrwPolicyV1 {
        walk_count: 1,
        walk_length: 2,
        max_steps: 1,
        heuristic_weight: 0.5,
        budget: SearchBudgetV1 {
            max_iterations: None,
            max_wall_time: Some(Duration::from_secs(5)),
        },
        ..MrwPolicyV1::default()
    };
    let result = search(&problem, &GoalCountHeuristic, &policy).unwrap();
    assert!(result.is_goal_reached());
}
