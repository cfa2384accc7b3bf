//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (goal reached, budget exhausted) are expressed via
//! [`crate::search::TerminationReasonV1`] and always come with statistics.

use mcplan_kernel::problem::requirement::RequirementV1;

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before any walk is taken.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A tunable is out of range.
    #[error("invalid search configuration: {detail}")]
    InvalidConfiguration { detail: String },
    /// The problem declares requirements the planner cannot handle.
    #[error("problem not supported: requires {}", render(.requirements))]
    UnsupportedProblem { requirements: Vec<RequirementV1> },
}

fn render(requirements: &[RequirementV1]) -> String {
    requirements
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
