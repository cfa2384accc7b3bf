//! Ground actions and conditional effects.

use crate::carrier::fact::FactId;
use crate::carrier::state::StateV1;
use crate::operators::condition::ConditionV1;

/// One conditional effect: when `condition` holds in the pre-state, delete
/// `delete` and add `add`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ConditionalEffectV1 {
    pub condition: ConditionV1,
    pub add: Vec<FactId>,
    pub delete: Vec<FactId>,
}

impl ConditionalEffectV1 {
    /// An effect guarded by the empty condition.
    #[must_use]
    pub fn unconditional(add: Vec<FactId>, delete: Vec<FactId>) -> Self {
        Self {
            condition: ConditionV1::empty(),
            add,
            delete,
        }
    }

    #[must_use]
    pub fn when(condition: ConditionV1, add: Vec<FactId>, delete: Vec<FactId>) -> Self {
        Self {
            condition,
            add,
            delete,
        }
    }
}

/// A ground operator: precondition plus conditional effects.
///
/// Actions are owned by the problem's action table and referenced by index
/// everywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionV1 {
    name: String,
    precondition: ConditionV1,
    effects: Vec<ConditionalEffectV1>,
}

impl ActionV1 {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        precondition: ConditionV1,
        effects: Vec<ConditionalEffectV1>,
    ) -> Self {
        Self {
            name: name.into(),
            precondition,
            effects,
        }
    }

    /// Convenience constructor for a STRIPS action with one unconditional effect.
    #[must_use]
    pub fn strips(
        name: impl Into<String>,
        precondition: ConditionV1,
        add: Vec<FactId>,
        delete: Vec<FactId>,
    ) -> Self {
        Self::new(
            name,
            precondition,
            vec![ConditionalEffectV1::unconditional(add, delete)],
        )
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn precondition(&self) -> &ConditionV1 {
        &self.precondition
    }

    #[must_use]
    pub fn effects(&self) -> &[ConditionalEffectV1] {
        &self.effects
    }

    #[must_use]
    pub fn is_applicable(&self, state: &StateV1) -> bool {
        self.precondition.holds_in(state)
    }

    /// All fact ids mentioned by the precondition and effects.
    pub fn facts(&self) -> impl Iterator<Item = FactId> + '_ {
        self.precondition.facts().chain(self.effects.iter().flat_map(|e| {
            e.condition
                .facts()
                .chain(e.add.iter().copied())
                .chain(e.delete.iter().copied())
        }))
    }
}

/// Apply a set of conditional effects to `state`.
///
/// Every guard is evaluated against the pre-state, so the result does not
/// depend on effect order. Deletes of all triggered effects are applied
/// before their adds. The caller is responsible for the applicability gate.
#[must_use]
pub fn apply_effects(state: &StateV1, effects: &[ConditionalEffectV1]) -> StateV1 {
    let mut delete = Vec::new();
    let mut add = Vec::new();
    for effect in effects.iter().filter(|e| e.condition.holds_in(state)) {
        delete.extend_from_slice(&effect.delete);
        add.extend_from_slice(&effect.add);
    }
    state.with_delta(&delete, &add)
}
