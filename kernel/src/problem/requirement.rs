//! Declared requirement keys and the support predicate.

use std::fmt;
use std::str::FromStr;

/// A requirement key a problem declares (`:strips`, `:typing`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RequirementV1 {
    Strips,
    Typing,
    NegativePreconditions,
    DisjunctivePreconditions,
    Equality,
    ExistentialPreconditions,
    UniversalPreconditions,
    QuantifiedPreconditions,
    ConditionalEffects,
    Adl,
    ActionCosts,
    Constraints,
    ContinuousEffects,
    DerivedPredicates,
    DurativeActions,
    DurationInequalities,
    Fluents,
    GoalUtilities,
    MethodConstraints,
    NumericFluents,
    ObjectFluents,
    Preferences,
    TimedInitialLiterals,
    Hierarchy,
}

impl RequirementV1 {
    pub const ALL: [Self; 24] = [
        Self::Strips,
        Self::Typing,
        Self::NegativePreconditions,
        Self::DisjunctivePreconditions,
        Self::Equality,
        Self::ExistentialPreconditions,
        Self::UniversalPreconditions,
        Self::QuantifiedPreconditions,
        Self::ConditionalEffects,
        Self::Adl,
        Self::ActionCosts,
        Self::Constraints,
        Self::ContinuousEffects,
        Self::DerivedPredicates,
        Self::DurativeActions,
        Self::DurationInequalities,
        Self::Fluents,
        Self::GoalUtilities,
        Self::MethodConstraints,
        Self::NumericFluents,
        Self::ObjectFluents,
        Self::Preferences,
        Self::TimedInitialLiterals,
        Self::Hierarchy,
    ];

    /// The keyword without its leading colon.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Strips => "strips",
            Self::Typing => "typing",
            Self::NegativePreconditions => "negative-preconditions",
            Self::DisjunctivePreconditions => "disjunctive-preconditions",
            Self::Equality => "equality",
            Self::ExistentialPreconditions => "existential-preconditions",
            Self::UniversalPreconditions => "universal-preconditions",
            Self::QuantifiedPreconditions => "quantified-preconditions",
            Self::ConditionalEffects => "conditional-effects",
            Self::Adl => "adl",
            Self::ActionCosts => "action-costs",
            Self::Constraints => "constraints",
            Self::ContinuousEffects => "continuous-effects",
            Self::DerivedPredicates => "derived-predicates",
            Self::DurativeActions => "durative-actions",
            Self::DurationInequalities => "duration-inequalities",
            Self::Fluents => "fluents",
            Self::GoalUtilities => "goal-utilities",
            Self::MethodConstraints => "method-constraints",
            Self::NumericFluents => "numeric-fluents",
            Self::ObjectFluents => "object-fluents",
            Self::Preferences => "preferences",
            Self::TimedInitialLiterals => "timed-initial-literals",
            Self::Hierarchy => "hierarchy",
        }
    }

    /// Whether the random-walk planner can handle problems declaring this key.
    ///
    /// Only propositional, non-hierarchical, non-temporal STRIPS/ADL
    /// requirements are supported.
    #[must_use]
    pub const fn is_supported(self) -> bool {
        matches!(
            self,
            Self::Strips
                | Self::Typing
                | Self::NegativePreconditions
                | Self::DisjunctivePreconditions
                | Self::Equality
                | Self::ExistentialPreconditions
                | Self::UniversalPreconditions
                | Self::QuantifiedPreconditions
                | Self::ConditionalEffects
                | Self::Adl
        )
    }
}

impl fmt::Display for RequirementV1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.keyword())
    }
}

/// Error parsing a requirement keyword.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown requirement keyword `{0}`")]
pub struct UnknownRequirement(pub String);

impl FromStr for RequirementV1 {
    type Err = UnknownRequirement;

    /// Accepts the keyword with or without its leading colon, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().trim_start_matches(':').to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|r| r.keyword() == key)
            .ok_or_else(|| UnknownRequirement(s.to_string()))
    }
}
