//! Plan extraction from a goal node.

use mcplan_kernel::operators::action::ActionV1;
use mcplan_kernel::problem::ProblemV1;
use mcplan_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_PLAN};

use crate::node::SearchNodeV1;

/// An ordered sequence of action indices into a problem's action table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PlanV1 {
    actions: Vec<usize>,
}

impl PlanV1 {
    #[must_use]
    pub fn new(actions: Vec<usize>) -> Self {
        Self { actions }
    }

    #[must_use]
    pub fn action_indices(&self) -> &[usize] {
        &self.actions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Resolve indices against `problem`'s action table.
    ///
    /// Indices that do not resolve are skipped; a plan extracted from a node
    /// of the same problem always resolves fully.
    #[must_use]
    pub fn resolve<'p>(&self, problem: &'p ProblemV1) -> Vec<&'p ActionV1> {
        self.actions
            .iter()
            .filter_map(|&i| problem.action(i))
            .collect()
    }

    #[must_use]
    pub fn action_names(&self, problem: &ProblemV1) -> Vec<String> {
        self.resolve(problem)
            .into_iter()
            .map(|a| a.name().to_string())
            .collect()
    }

    /// Digest over the `\0`-terminated action names, for comparing plans
    /// across runs and processes.
    #[must_use]
    pub fn digest(&self, problem: &ProblemV1) -> ContentHash {
        let mut data = Vec::new();
        for action in self.resolve(problem) {
            data.extend_from_slice(action.name().as_bytes());
            data.push(0);
        }
        canonical_hash(DOMAIN_PLAN, &data)
    }
}

/// Reconstruct the plan leading from the root to `node`.
///
/// Walks parent links until the root (the node without a producing action)
/// and reverses. A root yields the empty plan.
#[must_use]
pub fn extract_plan(node: &SearchNodeV1) -> PlanV1 {
    let mut actions: Vec<usize> = node
        .ancestors()
        .map_while(SearchNodeV1::action_index)
        .collect();
    actions.reverse();
    PlanV1 { actions }
}
