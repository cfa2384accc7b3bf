//! `replay_verify()`: verify a plan by deterministic replay.
//!
//! A plan is valid only if every action is applicable in turn from the
//! initial state and the final state satisfies the goal. There is no
//! partially valid plan.

use crate::carrier::state::StateV1;
use crate::operators::apply::{apply, ApplyFailure};
use crate::problem::ProblemV1;

/// Why a plan failed replay.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    /// A plan step references an index outside the action table.
    #[error("step {step}: action index {index} out of range ({action_count} actions)")]
    UnknownAction {
        step: usize,
        index: usize,
        action_count: usize,
    },
    /// A plan step is not applicable in the state reached so far.
    #[error("step {step}: {failure}")]
    NotApplicable { step: usize, failure: ApplyFailure },
    /// Every step applied, but the final state misses the goal.
    #[error("final state {fingerprint} does not satisfy the goal ({unsatisfied} literal(s) unsatisfied)")]
    GoalNotSatisfied {
        fingerprint: String,
        unsatisfied: usize,
    },
}

/// Replay `plan` (action indices) from the problem's initial state.
///
/// Returns the final state when the plan is valid.
///
/// # Errors
///
/// Returns the first [`ReplayError`] encountered.
pub fn replay_verify(problem: &ProblemV1, plan: &[usize]) -> Result<StateV1, ReplayError> {
    let mut state = problem.initial_state().clone();
    for (step, &index) in plan.iter().enumerate() {
        let action = problem.action(index).ok_or(ReplayError::UnknownAction {
            step,
            index,
            action_count: problem.actions().len(),
        })?;
        state = apply(&state, action).map_err(|failure| ReplayError::NotApplicable { step, failure })?;
    }
    if !problem.is_goal(&state) {
        return Err(ReplayError::GoalNotSatisfied {
            fingerprint: state.fingerprint().to_string(),
            unsatisfied: problem.goal().unsatisfied_count(&state),
        });
    }
    Ok(state)
}
