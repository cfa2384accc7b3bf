//! Search entry point and the Monte-Carlo restart loop.
//!
//! [`MonteCarloSearch`] is the loop as an explicit state machine: each
//! [`MonteCarloSearch::step`] is one iteration. [`search`] drives it under the
//! policy's budget.

use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use mcplan_kernel::problem::ProblemV1;

use crate::error::SearchError;
use crate::heuristic::StateHeuristic;
use crate::node::SearchNodeV1;
use crate::plan::{extract_plan, PlanV1};
use crate::policy::MrwPolicyV1;
use crate::walk::random_walk;

/// Why the search loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    GoalReached,
    /// `budget.max_iterations` iterations ran without reaching the goal.
    IterationBudgetExhausted { iterations: u64 },
    /// `budget.max_wall_time` elapsed without reaching the goal.
    TimeBudgetExhausted { elapsed: Duration },
}

/// Why the current trajectory was abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartCauseV1 {
    /// `max_steps` consecutive iterations without a new best heuristic.
    Stalled,
    /// The current node has no applicable action.
    DeadEnd,
}

/// What happened during one loop iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationReportV1 {
    /// Set when the iteration began with a restart.
    pub restart: Option<RestartCauseV1>,
    /// Depth of the node the walk batch started from (0 after a restart).
    pub walk_start_depth: u32,
    /// Heuristic of the node the walk batch returned.
    pub walk_result_h: f64,
    pub reached_goal: bool,
    /// Whether `h_min` strictly decreased.
    pub improved: bool,
    /// Best-ever heuristic after this iteration.
    pub h_min: f64,
    /// Stall counter after this iteration.
    pub counter: u64,
}

/// Outcome of [`MonteCarloSearch::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoopStepV1 {
    /// The current node satisfies the goal; stepping again is a no-op.
    GoalReached,
    Iterated(IterationReportV1),
}

/// Aggregate counters for one search episode.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchStatsV1 {
    pub iterations: u64,
    pub restarts_stalled: u64,
    pub restarts_dead_end: u64,
    pub walk_attempts: u64,
    pub nodes_generated: u64,
    pub dead_end_attempts: u64,
    pub improvements: u64,
    /// Best-ever heuristic value.
    pub h_min: f64,
    /// Heuristic of the initial state.
    pub initial_h: f64,
}

impl SearchStatsV1 {
    #[must_use]
    pub fn restarts(&self) -> u64 {
        self.restarts_stalled + self.restarts_dead_end
    }
}

/// The restart loop over a "current" node.
///
/// Invariants:
/// - `h_min` starts at the root heuristic and only ever decreases strictly;
///   restarts do not touch it.
/// - a restart replaces the current node by a freshly built root and resets
///   the stall counter to 0.
pub struct MonteCarloSearch<'a> {
    problem: &'a ProblemV1,
    heuristic: &'a dyn StateHeuristic,
    policy: &'a MrwPolicyV1,
    rng: StdRng,
    current: Arc<SearchNodeV1>,
    counter: u64,
    h_min: f64,
    stats: SearchStatsV1,
    applicable: Vec<usize>,
}

impl<'a> MonteCarloSearch<'a> {
    /// Validate the policy and the problem, then position the loop on a
    /// fresh root.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidConfiguration`] if the policy fails validation.
    /// - [`SearchError::UnsupportedProblem`] if the problem declares
    ///   requirements outside propositional STRIPS/ADL.
    pub fn new(
        problem: &'a ProblemV1,
        heuristic: &'a dyn StateHeuristic,
        policy: &'a MrwPolicyV1,
    ) -> Result<Self, SearchError> {
        policy.validate()?;
        let unsupported = problem.unsupported_requirements();
        if !unsupported.is_empty() {
            return Err(SearchError::UnsupportedProblem {
                requirements: unsupported,
            });
        }

        let current = fresh_root(problem, heuristic);
        let h_min = current.heuristic();
        Ok(Self {
            problem,
            heuristic,
            policy,
            rng: StdRng::seed_from_u64(policy.seed),
            current,
            counter: 0,
            h_min,
            stats: SearchStatsV1 {
                h_min,
                initial_h: h_min,
                ..SearchStatsV1::default()
            },
            applicable: Vec::new(),
        })
    }

    #[must_use]
    pub fn current(&self) -> &Arc<SearchNodeV1> {
        &self.current
    }

    #[must_use]
    pub fn counter(&self) -> u64 {
        self.counter
    }

    #[must_use]
    pub fn h_min(&self) -> f64 {
        self.h_min
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStatsV1 {
        &self.stats
    }

    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.current.satisfies(self.problem.goal())
    }

    /// Run one loop iteration.
    pub fn step(&mut self) -> LoopStepV1 {
        if self.is_goal_reached() {
            return LoopStepV1::GoalReached;
        }

        let restart = if self.counter >= self.policy.max_steps {
            Some(RestartCauseV1::Stalled)
        } else {
            self.problem
                .applicable_actions_into(self.current.state(), &mut self.applicable);
            self.applicable
                .is_empty()
                .then_some(RestartCauseV1::DeadEnd)
        };
        if let Some(cause) = restart {
            tracing::debug!(
                ?cause,
                abandoned_depth = self.current.depth(),
                h_min = self.h_min,
                "restarting from the initial state"
            );
            match cause {
                RestartCauseV1::Stalled => self.stats.restarts_stalled += 1,
                RestartCauseV1::DeadEnd => self.stats.restarts_dead_end += 1,
            }
            self.current = fresh_root(self.problem, self.heuristic);
            self.counter = 0;
        }

        let walk_start_depth = self.current.depth();
        let outcome = random_walk(
            self.problem,
            &self.current,
            self.heuristic,
            self.policy,
            &mut self.rng,
        );
        self.stats.iterations += 1;
        self.stats.walk_attempts += outcome.attempts_run;
        self.stats.nodes_generated += outcome.nodes_generated;
        self.stats.dead_end_attempts += outcome.dead_end_attempts;

        let walk_result_h = outcome.node.heuristic();
        let improved = walk_result_h < self.h_min;
        if improved {
            tracing::debug!(
                from = self.h_min,
                to = walk_result_h,
                depth = outcome.node.depth(),
                "new best heuristic"
            );
            self.h_min = walk_result_h;
            self.counter = 0;
            self.stats.improvements += 1;
            self.stats.h_min = walk_result_h;
        } else {
            self.counter += 1;
        }
        self.current = outcome.node;

        let report = IterationReportV1 {
            restart,
            walk_start_depth,
            walk_result_h,
            reached_goal: outcome.reached_goal,
            improved,
            h_min: self.h_min,
            counter: self.counter,
        };
        tracing::trace!(iteration = self.stats.iterations, ?report, "iteration");
        LoopStepV1::Iterated(report)
    }
}

fn fresh_root(problem: &ProblemV1, heuristic: &dyn StateHeuristic) -> Arc<SearchNodeV1> {
    let state = problem.initial_state().clone();
    let h = heuristic.estimate(&state, problem.goal());
    SearchNodeV1::root(state, h)
}

/// Result of a search execution.
#[derive(Debug, Clone)]
pub struct SearchResultV1 {
    pub termination: TerminationReasonV1,
    /// The extracted plan (only when the goal was reached).
    pub plan: Option<PlanV1>,
    /// The goal node and, through its parents, the whole solution path.
    pub goal_node: Option<Arc<SearchNodeV1>>,
    pub stats: SearchStatsV1,
    pub elapsed: Duration,
}

impl SearchResultV1 {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self.termination, TerminationReasonV1::GoalReached)
    }
}

/// Run Monte-Carlo random-walk search from the problem's initial state.
///
/// The budget is checked before every iteration. Budget exhaustion is not an
/// error; it returns `Ok` with no plan and the corresponding
/// [`TerminationReasonV1`].
///
/// # Errors
///
/// Returns [`SearchError`] only for pre-flight failures (invalid policy,
/// unsupported problem). No walk is taken in that case.
pub fn search(
    problem: &ProblemV1,
    heuristic: &dyn StateHeuristic,
    policy: &MrwPolicyV1,
) -> Result<SearchResultV1, SearchError> {
    let mut mc = MonteCarloSearch::new(problem, heuristic, policy)?;
    tracing::info!(
        problem = problem.name(),
        actions = problem.actions().len(),
        facts = problem.facts().len(),
        heuristic = %policy.heuristic,
        weight = policy.heuristic_weight,
        walk_count = policy.walk_count,
        walk_length = policy.walk_length,
        max_steps = policy.max_steps,
        seed = policy.seed,
        parallel = policy.parallel_walks,
        "starting Monte-Carlo search"
    );

    let begin = Instant::now();
    let termination = loop {
        if mc.is_goal_reached() {
            break TerminationReasonV1::GoalReached;
        }
        let iterations = mc.stats().iterations;
        if policy
            .budget
            .max_iterations
            .is_some_and(|max| iterations >= max)
        {
            break TerminationReasonV1::IterationBudgetExhausted { iterations };
        }
        let elapsed = begin.elapsed();
        if policy
            .budget
            .max_wall_time
            .is_some_and(|max| elapsed >= max)
        {
            break TerminationReasonV1::TimeBudgetExhausted { elapsed };
        }
        mc.step();
    };
    let elapsed = begin.elapsed();

    let (plan, goal_node) = if termination == TerminationReasonV1::GoalReached {
        let node = Arc::clone(mc.current());
        (Some(extract_plan(&node)), Some(node))
    } else {
        (None, None)
    };

    let stats = *mc.stats();
    match &plan {
        Some(plan) => tracing::info!(
            plan_length = plan.len(),
            iterations = stats.iterations,
            restarts = stats.restarts(),
            nodes = stats.nodes_generated,
            elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            "Monte-Carlo search succeeded"
        ),
        None => tracing::info!(
            ?termination,
            iterations = stats.iterations,
            restarts = stats.restarts(),
            h_min = stats.h_min,
            elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            "Monte-Carlo search failed"
        ),
    }

    Ok(SearchResultV1 {
        termination,
        plan,
        goal_node,
        stats,
        elapsed,
    })
}
