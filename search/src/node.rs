//! Search node model.
//!
//! Nodes form a forest of parent pointers only. A node holds an `Arc` to its
//! parent and nothing points downwards, so the only nodes kept alive are the
//! ancestor chains of nodes somebody still holds (the current node, the
//! best-so-far node of a walk batch). Everything a walk attempt discards is
//! freed when the attempt ends.

use std::fmt;
use std::sync::Arc;

use mcplan_kernel::carrier::state::StateV1;
use mcplan_kernel::operators::action::{apply_effects, ActionV1};
use mcplan_kernel::operators::condition::ConditionV1;

use crate::heuristic::StateHeuristic;

/// An immutable node of the search tree.
///
/// Every field is fixed at construction. `depth` equals `cost` because each
/// action costs one.
pub struct SearchNodeV1 {
    state: StateV1,
    parent: Option<Arc<SearchNodeV1>>,
    action_index: Option<usize>,
    cost: u64,
    depth: u32,
    heuristic: f64,
}

impl SearchNodeV1 {
    /// A fresh root for `state` (no parent, no producing action, cost 0).
    #[must_use]
    pub fn root(state: StateV1, heuristic: f64) -> Arc<Self> {
        Arc::new(Self {
            state,
            parent: None,
            action_index: None,
            cost: 0,
            depth: 0,
            heuristic,
        })
    }

    /// A child of `parent` reached through action `action_index`.
    #[must_use]
    pub fn child(parent: &Arc<Self>, action_index: usize, state: StateV1, heuristic: f64) -> Arc<Self> {
        Arc::new(Self {
            state,
            parent: Some(Arc::clone(parent)),
            action_index: Some(action_index),
            cost: parent.cost + 1,
            depth: parent.depth.saturating_add(1),
            heuristic,
        })
    }

    /// Apply `action` (already known to be applicable) to `parent`'s state
    /// and evaluate the successor once.
    #[must_use]
    pub fn expand(
        parent: &Arc<Self>,
        action_index: usize,
        action: &ActionV1,
        goal: &ConditionV1,
        heuristic: &dyn StateHeuristic,
    ) -> Arc<Self> {
        let state = apply_effects(&parent.state, action.effects());
        let h = heuristic.estimate(&state, goal);
        Self::child(parent, action_index, state, h)
    }

    #[must_use]
    pub fn state(&self) -> &StateV1 {
        &self.state
    }

    #[must_use]
    pub fn parent(&self) -> Option<&Arc<SearchNodeV1>> {
        self.parent.as_ref()
    }

    /// Index of the action that produced this node; `None` for a root.
    #[must_use]
    pub fn action_index(&self) -> Option<usize> {
        self.action_index
    }

    #[must_use]
    pub fn cost(&self) -> u64 {
        self.cost
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn heuristic(&self) -> f64 {
        self.heuristic
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    #[must_use]
    pub fn satisfies(&self, goal: &ConditionV1) -> bool {
        goal.holds_in(&self.state)
    }

    /// Iterate from this node up to (and including) its root.
    pub fn ancestors(&self) -> impl Iterator<Item = &SearchNodeV1> {
        std::iter::successors(Some(self), |n| n.parent.as_deref())
    }
}

// Unlink the parent chain iteratively; the default recursive drop would use
// one stack frame per uniquely owned ancestor.
impl Drop for SearchNodeV1 {
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut inner) => next = inner.parent.take(),
                Err(_) => break,
            }
        }
    }
}

impl fmt::Debug for SearchNodeV1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchNodeV1")
            .field("state", &self.state.fingerprint().to_string())
            .field("action_index", &self.action_index)
            .field("cost", &self.cost)
            .field("depth", &self.depth)
            .field("heuristic", &self.heuristic)
            .field("parent_depth", &self.parent.as_ref().map(|p| p.depth))
            .finish()
    }
}
