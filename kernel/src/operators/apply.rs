//! `apply()`: checked application of a ground action.
//!
//! The search hot path gates on [`ActionV1::is_applicable`] and then calls
//! [`apply_effects`] directly. This entry point re-checks the precondition
//! and is what replay verification uses.

use crate::carrier::state::StateV1;
use crate::operators::action::{apply_effects, ActionV1};

/// Typed failure for operator application. Fail-closed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplyFailure {
    /// The action's precondition does not hold in the given state.
    #[error("precondition of `{action}` not met ({unsatisfied} literal(s) unsatisfied)")]
    PreconditionNotMet { action: String, unsatisfied: usize },
}

/// Apply `action` to `state`, producing the successor state.
///
/// # Errors
///
/// Returns [`ApplyFailure::PreconditionNotMet`] if the action is not
/// applicable in `state`.
pub fn apply(state: &StateV1, action: &ActionV1) -> Result<StateV1, ApplyFailure> {
    if !action.is_applicable(state) {
        return Err(ApplyFailure::PreconditionNotMet {
            action: action.name().to_string(),
            unsatisfied: action.precondition().unsatisfied_count(state),
        });
    }
    Ok(apply_effects(state, action.effects()))
}

/// Collect the indices of every action applicable in `state` into `out`.
///
/// `out` is cleared first so callers can reuse one buffer across steps.
pub fn applicable_indices_into(actions: &[ActionV1], state: &StateV1, out: &mut Vec<usize>) {
    out.clear();
    out.extend(
        actions
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_applicable(state))
            .map(|(i, _)| i),
    );
}
