//! Ground planning problems.
//!
//! A [`ProblemV1`] is what the grounding collaborator hands to the search:
//! the fact universe, the initial state, the goal, the ordered action table,
//! and the declared requirement set. Action indices into the table are
//! stable for the lifetime of the problem.

pub mod requirement;

use std::collections::{BTreeSet, HashSet};

use crate::carrier::fact::{FactId, FactTableV1};
use crate::carrier::state::StateV1;
use crate::operators::action::ActionV1;
use crate::operators::apply::applicable_indices_into;
use crate::operators::condition::ConditionV1;

use self::requirement::RequirementV1;

/// Typed failure for problem construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProblemError {
    /// An action or the goal references a fact outside the fact table.
    #[error("{context} references unknown fact {fact} (fact table has {fact_count} entries)")]
    UnknownFact {
        context: String,
        fact: FactId,
        fact_count: usize,
    },
    /// Two actions share a name, which would make plans ambiguous.
    #[error("duplicate action name `{name}`")]
    DuplicateActionName { name: String },
}

/// An immutable ground planning problem.
#[derive(Debug, Clone)]
pub struct ProblemV1 {
    name: String,
    facts: FactTableV1,
    initial_state: StateV1,
    goal: ConditionV1,
    actions: Vec<ActionV1>,
    requirements: BTreeSet<RequirementV1>,
}

impl ProblemV1 {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn facts(&self) -> &FactTableV1 {
        &self.facts
    }

    #[must_use]
    pub fn initial_state(&self) -> &StateV1 {
        &self.initial_state
    }

    #[must_use]
    pub fn goal(&self) -> &ConditionV1 {
        &self.goal
    }

    /// The full ordered action table.
    #[must_use]
    pub fn actions(&self) -> &[ActionV1] {
        &self.actions
    }

    #[must_use]
    pub fn action(&self, index: usize) -> Option<&ActionV1> {
        self.actions.get(index)
    }

    /// Index of the action called `name`.
    #[must_use]
    pub fn action_index(&self, name: &str) -> Option<usize> {
        self.actions.iter().position(|a| a.name() == name)
    }

    #[must_use]
    pub fn requirements(&self) -> &BTreeSet<RequirementV1> {
        &self.requirements
    }

    #[must_use]
    pub fn is_goal(&self, state: &StateV1) -> bool {
        self.goal.holds_in(state)
    }

    /// Indices of every action whose precondition holds in `state`.
    ///
    /// Never fails; an empty result marks a dead end.
    #[must_use]
    pub fn applicable_actions(&self, state: &StateV1) -> Vec<usize> {
        let mut out = Vec::new();
        applicable_indices_into(&self.actions, state, &mut out);
        out
    }

    /// Buffer-reusing form of [`ProblemV1::applicable_actions`].
    pub fn applicable_actions_into(&self, state: &StateV1, out: &mut Vec<usize>) {
        applicable_indices_into(&self.actions, state, out);
    }

    /// Declared requirements the random-walk planner cannot handle, in
    /// ascending order. Empty when the problem is supported.
    #[must_use]
    pub fn unsupported_requirements(&self) -> Vec<RequirementV1> {
        self.requirements
            .iter()
            .copied()
            .filter(|r| !r.is_supported())
            .collect()
    }

    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.requirements.iter().all(|r| r.is_supported())
    }
}

/// Incremental constructor for [`ProblemV1`].
///
/// Fact names are interned on first use. [`ProblemBuilder::build`] validates
/// every fact reference and action-name uniqueness.
#[derive(Debug, Clone)]
pub struct ProblemBuilder {
    name: String,
    facts: FactTableV1,
    init: Vec<FactId>,
    goal: ConditionV1,
    actions: Vec<ActionV1>,
    requirements: BTreeSet<RequirementV1>,
}

impl ProblemBuilder {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            facts: FactTableV1::new(),
            init: Vec::new(),
            goal: ConditionV1::empty(),
            actions: Vec::new(),
            requirements: BTreeSet::new(),
        }
    }

    /// Intern a fact name.
    pub fn fact(&mut self, name: &str) -> FactId {
        self.facts.intern(name)
    }

    /// Mark `fact` true in the initial state.
    pub fn initially(&mut self, fact: FactId) -> &mut Self {
        self.init.push(fact);
        self
    }

    /// Require `fact` to be true in goal states.
    pub fn goal_true(&mut self, fact: FactId) -> &mut Self {
        self.goal.positive.push(fact);
        self
    }

    /// Require `fact` to be false in goal states.
    pub fn goal_false(&mut self, fact: FactId) -> &mut Self {
        self.goal.negative.push(fact);
        self
    }

    pub fn action(&mut self, action: ActionV1) -> &mut Self {
        self.actions.push(action);
        self
    }

    pub fn require(&mut self, requirement: RequirementV1) -> &mut Self {
        self.requirements.insert(requirement);
        self
    }

    /// Validate and freeze the problem.
    ///
    /// # Errors
    ///
    /// - [`ProblemError::UnknownFact`] if the initial state, goal or an
    ///   action references a fact id that was never interned.
    /// - [`ProblemError::DuplicateActionName`] if two actions share a name.
    pub fn build(self) -> Result<ProblemV1, ProblemError> {
        let fact_count = self.facts.len();
        let check = |context: &dyn Fn() -> String, fact: FactId| {
            if self.facts.contains(fact) {
                Ok(())
            } else {
                Err(ProblemError::UnknownFact {
                    context: context(),
                    fact,
                    fact_count,
                })
            }
        };

        for &fact in &self.init {
            check(&|| "initial state".to_string(), fact)?;
        }
        for fact in self.goal.facts() {
            check(&|| "goal".to_string(), fact)?;
        }
        let mut names = HashSet::with_capacity(self.actions.len());
        for action in &self.actions {
            for fact in action.facts() {
                check(&|| format!("action `{}`", action.name()), fact)?;
            }
            if !names.insert(action.name()) {
                return Err(ProblemError::DuplicateActionName {
                    name: action.name().to_string(),
                });
            }
        }

        let initial_state = StateV1::from_facts(fact_count, self.init.iter().copied());
        Ok(ProblemV1 {
            name: self.name,
            facts: self.facts,
            initial_state,
            goal: self.goal,
            actions: self.actions,
            requirements: self.requirements,
        })
    }
}
