//! The random walk procedure.
//!
//! One call runs a batch of `walk_count` independent attempts from the same
//! start node. Each attempt takes up to `walk_length - 1` uniformly random
//! applicable actions, stops early at a dead end, and returns as soon as it
//! reaches a goal. The batch yields the first goal-reaching node, or else
//! the attempt end point with the strictly lowest heuristic (earliest attempt
//! on ties), or the start node when no end point beat `+inf`.
//!
//! # Randomness
//!
//! The caller's generator is consumed for exactly one `u64` per attempt,
//! before any attempt runs. Attempt `i` then draws from its own `StdRng`
//! seeded with seed `i`. Sequential and parallel batches therefore visit the
//! same nodes and return the same result.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rayon::prelude::*;

use mcplan_kernel::problem::ProblemV1;

use crate::heuristic::StateHeuristic;
use crate::node::SearchNodeV1;
use crate::policy::MrwPolicyV1;

/// Result of one random-walk batch.
#[derive(Debug, Clone)]
pub struct WalkOutcomeV1 {
    /// Goal node, best end point, or the start node itself.
    pub node: Arc<SearchNodeV1>,
    pub reached_goal: bool,
    /// Attempts folded into the result (fewer than `walk_count` after an early goal).
    pub attempts_run: u64,
    /// Nodes created by the folded attempts.
    pub nodes_generated: u64,
    /// Folded attempts that stopped because no action was applicable.
    pub dead_end_attempts: u64,
}

impl WalkOutcomeV1 {
    /// Whether the batch returned its start node unchanged.
    #[must_use]
    pub fn is_no_improvement(&self, start: &Arc<SearchNodeV1>) -> bool {
        Arc::ptr_eq(&self.node, start)
    }
}

struct Attempt {
    terminal: Arc<SearchNodeV1>,
    reached_goal: bool,
    generated: u64,
    dead_end: bool,
}

/// Run one random-walk batch from `start`.
///
/// `policy` supplies `walk_count`, `walk_length` and `parallel_walks`; it is
/// assumed to have passed [`MrwPolicyV1::validate`].
pub fn random_walk<R: RngCore>(
    problem: &ProblemV1,
    start: &Arc<SearchNodeV1>,
    heuristic: &dyn StateHeuristic,
    policy: &MrwPolicyV1,
    rng: &mut R,
) -> WalkOutcomeV1 {
    let seeds: Vec<u64> = (0..policy.walk_count).map(|_| rng.next_u64()).collect();
    let walk_length = policy.walk_length;

    let outcome = if policy.parallel_walks {
        let attempts: Vec<Attempt> = seeds
            .par_iter()
            .map(|&seed| run_attempt(problem, start, heuristic, walk_length, seed))
            .collect();
        fold_attempts(start, attempts)
    } else {
        fold_attempts(
            start,
            seeds
                .iter()
                .map(|&seed| run_attempt(problem, start, heuristic, walk_length, seed)),
        )
    };

    tracing::trace!(
        start_depth = start.depth(),
        result_depth = outcome.node.depth(),
        result_h = outcome.node.heuristic(),
        reached_goal = outcome.reached_goal,
        attempts = outcome.attempts_run,
        generated = outcome.nodes_generated,
        "random walk batch finished"
    );
    outcome
}

fn run_attempt(
    problem: &ProblemV1,
    start: &Arc<SearchNodeV1>,
    heuristic: &dyn StateHeuristic,
    walk_length: u64,
    seed: u64,
) -> Attempt {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut node = Arc::clone(start);
    let mut applicable = Vec::new();
    let mut generated = 0;

    for _ in 1..walk_length {
        problem.applicable_actions_into(node.state(), &mut applicable);
        if applicable.is_empty() {
            return Attempt {
                terminal: node,
                reached_goal: false,
                generated,
                dead_end: true,
            };
        }
        let index = applicable[rng.random_range(0..applicable.len())];
        node = SearchNodeV1::expand(
            &node,
            index,
            &problem.actions()[index],
            problem.goal(),
            heuristic,
        );
        generated += 1;
        if node.satisfies(problem.goal()) {
            return Attempt {
                terminal: node,
                reached_goal: true,
                generated,
                dead_end: false,
            };
        }
    }

    Attempt {
        terminal: node,
        reached_goal: false,
        generated,
        dead_end: false,
    }
}

/// Reduce attempts in index order. Stops consuming at the first goal.
fn fold_attempts(
    start: &Arc<SearchNodeV1>,
    attempts: impl IntoIterator<Item = Attempt>,
) -> WalkOutcomeV1 {
    let mut best: Option<Arc<SearchNodeV1>> = None;
    let mut h_min = f64::INFINITY;
    let mut attempts_run = 0;
    let mut nodes_generated = 0;
    let mut dead_end_attempts = 0;

    for attempt in attempts {
        attempts_run += 1;
        nodes_generated += attempt.generated;
        if attempt.dead_end {
            dead_end_attempts += 1;
        }
        if attempt.reached_goal {
            return WalkOutcomeV1 {
                node: attempt.terminal,
                reached_goal: true,
                attempts_run,
                nodes_generated,
                dead_end_attempts,
            };
        }
        if attempt.terminal.heuristic() < h_min {
            h_min = attempt.terminal.heuristic();
            best = Some(attempt.terminal);
        }
    }

    WalkOutcomeV1 {
        node: best.unwrap_or_else(|| Arc::clone(start)),
        reached_goal: false,
        attempts_run,
        nodes_generated,
        dead_end_attempts,
    }
}
