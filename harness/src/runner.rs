//! Planner runner: search a problem, verify the plan, and build a report.
//!
//! The runner uses ONLY search and kernel APIs. It does not implement any
//! search or replay logic itself.
//!
//! # Pipeline
//!
//! ```text
//! build_heuristic() → search() → [replay_verify() if a plan was found]
//!   → digest() → RunReportV1
//! ```
//!
//! A plan that fails replay is a planner bug and surfaces as
//! [`RunError::InvalidPlan`]; it is never reported as a solution.

use std::time::Duration;

use serde::Serialize;

use mcplan_kernel::problem::ProblemV1;
use mcplan_kernel::proof::replay::{replay_verify, ReplayError};
use mcplan_search::error::SearchError;
use mcplan_search::heuristic::build_heuristic;
use mcplan_search::policy::MrwPolicyV1;
use mcplan_search::search::{search, SearchResultV1, SearchStatsV1, TerminationReasonV1};

use crate::contract::PlanningWorldV1;

/// Error during a planner run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The world could not be grounded.
    #[error("world `{world}` is malformed: {source}")]
    World {
        world: String,
        source: mcplan_kernel::problem::ProblemError,
    },
    /// Pre-flight rejection by the search layer.
    #[error(transparent)]
    Search(#[from] SearchError),
    /// The search returned a plan that does not replay.
    #[error("search returned an invalid plan: {0}")]
    InvalidPlan(#[from] ReplayError),
}

/// Search counters in report form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReportV1 {
    pub iterations: u64,
    pub restarts_stalled: u64,
    pub restarts_dead_end: u64,
    pub walk_attempts: u64,
    pub nodes_generated: u64,
    pub dead_end_attempts: u64,
    pub improvements: u64,
    /// `None` when no finite estimate was ever seen.
    pub h_min: Option<f64>,
    pub initial_h: Option<f64>,
}

impl From<&SearchStatsV1> for StatsReportV1 {
    fn from(s: &SearchStatsV1) -> Self {
        let finite = |h: f64| h.is_finite().then_some(h);
        Self {
            iterations: s.iterations,
            restarts_stalled: s.restarts_stalled,
            restarts_dead_end: s.restarts_dead_end,
            walk_attempts: s.walk_attempts,
            nodes_generated: s.nodes_generated,
            dead_end_attempts: s.dead_end_attempts,
            improvements: s.improvements,
            h_min: finite(s.h_min),
            initial_h: finite(s.initial_h),
        }
    }
}

/// Serializable summary of one planner run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReportV1 {
    pub problem: String,
    /// `"goal-reached"`, `"iteration-budget-exhausted"` or `"time-budget-exhausted"`.
    pub termination: String,
    /// Action names in execution order (absent when no plan was found).
    pub plan: Option<Vec<String>>,
    /// `sha256:` digest of the plan's action names.
    pub plan_digest: Option<String>,
    pub stats: StatsReportV1,
    pub elapsed_ms: u64,
    pub policy: MrwPolicyV1,
}

impl RunReportV1 {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.plan.is_some()
    }
}

/// Result of [`run_planner`]: the raw search result plus its report.
#[derive(Debug, Clone)]
pub struct PlannerRunV1 {
    pub result: SearchResultV1,
    pub report: RunReportV1,
}

fn termination_label(reason: &TerminationReasonV1) -> &'static str {
    match reason {
        TerminationReasonV1::GoalReached => "goal-reached",
        TerminationReasonV1::IterationBudgetExhausted { .. } => "iteration-budget-exhausted",
        TerminationReasonV1::TimeBudgetExhausted { .. } => "time-budget-exhausted",
    }
}

fn duration_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

/// Search `problem` under `policy` and verify any plan found by replay.
///
/// # Errors
///
/// - [`RunError::Search`] for an invalid policy or unsupported problem.
/// - [`RunError::InvalidPlan`] if the returned plan fails replay.
pub fn run_planner(problem: &ProblemV1, policy: &MrwPolicyV1) -> Result<PlannerRunV1, RunError> {
    let heuristic = build_heuristic(policy.heuristic, policy.heuristic_weight);
    let result = search(problem, heuristic.as_ref(), policy)?;

    let (plan, plan_digest) = match &result.plan {
        Some(plan) => {
            replay_verify(problem, plan.action_indices())?;
            tracing::debug!(plan_length = plan.len(), "plan verified by replay");
            (
                Some(plan.action_names(problem)),
                Some(plan.digest(problem).to_string()),
            )
        }
        None => (None, None),
    };

    let report = RunReportV1 {
        problem: problem.name().to_string(),
        termination: termination_label(&result.termination).to_string(),
        plan,
        plan_digest,
        stats: StatsReportV1::from(&result.stats),
        elapsed_ms: duration_ms(result.elapsed),
        policy: policy.clone(),
    };
    Ok(PlannerRunV1 { result, report })
}

/// Ground `world` and run the planner on it.
///
/// # Errors
///
/// [`RunError::World`] if grounding fails, otherwise as [`run_planner`].
pub fn run_world(
    world: &dyn PlanningWorldV1,
    policy: &MrwPolicyV1,
) -> Result<PlannerRunV1, RunError> {
    let problem = world.build().map_err(|source| RunError::World {
        world: world.world_id(),
        source,
    })?;
    run_planner(&problem, policy)
}
