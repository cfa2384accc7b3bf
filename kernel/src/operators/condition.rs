//! Conjunctive fact conditions (preconditions, effect guards, goals).

use crate::carrier::fact::FactId;
use crate::carrier::state::StateV1;

/// A conjunction of literals: every `positive` fact true and every
/// `negative` fact false. The empty condition always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ConditionV1 {
    pub positive: Vec<FactId>,
    pub negative: Vec<FactId>,
}

impl ConditionV1 {
    /// The always-true condition.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A purely positive conjunction.
    #[must_use]
    pub fn all_of(facts: impl IntoIterator<Item = FactId>) -> Self {
        Self {
            positive: facts.into_iter().collect(),
            negative: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_negative(mut self, facts: impl IntoIterator<Item = FactId>) -> Self {
        self.negative.extend(facts);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }

    /// Number of literals in the conjunction.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    #[must_use]
    pub fn holds_in(&self, state: &StateV1) -> bool {
        self.positive.iter().all(|&f| state.holds(f))
            && self.negative.iter().all(|&f| !state.holds(f))
    }

    /// Number of literals not satisfied by `state`.
    #[must_use]
    pub fn unsatisfied_count(&self, state: &StateV1) -> usize {
        self.positive.iter().filter(|&&f| !state.holds(f)).count()
            + self.negative.iter().filter(|&&f| state.holds(f)).count()
    }

    /// All fact ids mentioned by this condition.
    pub fn facts(&self) -> impl Iterator<Item = FactId> + '_ {
        self.positive.iter().chain(self.negative.iter()).copied()
    }
}
