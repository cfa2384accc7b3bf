//! Search policy types.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::heuristic::HeuristicNameV1;

/// Default number of walk attempts per random-walk batch.
pub const DEFAULT_WALK_COUNT: u64 = 2000;
/// Default maximum walk length (an attempt takes at most `walk_length - 1` steps).
pub const DEFAULT_WALK_LENGTH: u64 = 10;
/// Default number of non-improving iterations before a restart.
pub const DEFAULT_MAX_STEPS: u64 = 7;
/// Default iteration cap of the search loop.
pub const DEFAULT_MAX_ITERATIONS: u64 = 100_000;

/// Hard stop for the search loop.
///
/// The loop itself has no exit on failure; at least one bound must be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchBudgetV1 {
    /// Maximum loop iterations (each runs one random-walk batch).
    pub max_iterations: Option<u64>,
    /// Maximum wall-clock time, checked before each iteration.
    #[serde(default, with = "duration_ms")]
    pub max_wall_time: Option<Duration>,
}

impl Default for SearchBudgetV1 {
    fn default() -> Self {
        Self {
            max_iterations: Some(DEFAULT_MAX_ITERATIONS),
            max_wall_time: None,
        }
    }
}

/// Tunables of the Monte-Carlo random-walk planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MrwPolicyV1 {
    /// Heuristic oracle selector.
    pub heuristic: HeuristicNameV1,
    /// Multiplier applied to the oracle's estimate. Must be finite and > 0.
    pub heuristic_weight: f64,
    /// Walk attempts per batch (`W`).
    pub walk_count: u64,
    /// Maximum walk length (`L`); attempts take up to `L - 1` steps.
    pub walk_length: u64,
    /// Non-improving iterations tolerated before a restart.
    pub max_steps: u64,
    /// Seed of the single pseudo-random source.
    pub seed: u64,
    /// Run the attempts of a batch on the rayon pool.
    pub parallel_walks: bool,
    pub budget: SearchBudgetV1,
}

impl Default for MrwPolicyV1 {
    fn default() -> Self {
        Self {
            heuristic: HeuristicNameV1::default(),
            heuristic_weight: 1.0,
            walk_count: DEFAULT_WALK_COUNT,
            walk_length: DEFAULT_WALK_LENGTH,
            max_steps: DEFAULT_MAX_STEPS,
            seed: 0,
            parallel_walks: false,
            budget: SearchBudgetV1::default(),
        }
    }
}

impl MrwPolicyV1 {
    /// Validate every tunable before search begins.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidConfiguration`] for a non-positive or
    /// non-finite weight, a zero walk count, a walk length below 2 (no steps
    /// would be taken), a zero stall threshold, or a budget with no bound.
    pub fn validate(&self) -> Result<(), SearchError> {
        let invalid = |detail: String| Err(SearchError::InvalidConfiguration { detail });

        if !self.heuristic_weight.is_finite() || self.heuristic_weight <= 0.0 {
            return invalid(format!(
                "heuristic weight must be finite and > 0, got {}",
                self.heuristic_weight
            ));
        }
        if self.walk_count == 0 {
            return invalid("walk count must be at least 1".into());
        }
        if self.walk_length < 2 {
            return invalid(format!(
                "walk length must be at least 2 (a walk takes length - 1 steps), got {}",
                self.walk_length
            ));
        }
        if self.max_steps == 0 {
            return invalid("max steps before restart must be at least 1".into());
        }
        match (self.budget.max_iterations, self.budget.max_wall_time) {
            (None, None) => invalid(
                "search budget is unbounded: set max_iterations or max_wall_time".into(),
            ),
            (Some(0), _) => invalid("max iterations must be at least 1".into()),
            (_, Some(d)) if d.is_zero() => invalid("max wall time must be non-zero".into()),
            _ => Ok(()),
        }
    }
}

mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(value: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
        value
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<u64>::deserialize(d)?.map(Duration::from_millis))
    }
}
