//! Heuristic oracle trait and reference oracles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use mcplan_kernel::carrier::state::StateV1;
use mcplan_kernel::operators::condition::ConditionV1;

/// Trait for state heuristics.
///
/// `estimate` must be a pure function of `(state, goal)`: non-negative,
/// lower is better, `f64::INFINITY` for a recognised dead end. Zero suggests
/// but does not prove goal satisfaction; the search always re-checks the goal.
///
/// `Send + Sync` so parallel walk attempts can share one oracle.
pub trait StateHeuristic: Send + Sync {
    fn estimate(&self, state: &StateV1, goal: &ConditionV1) -> f64;
}

/// Selector for the built-in oracles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicNameV1 {
    /// 0 when the goal holds, 1 otherwise.
    Blind,
    /// Number of goal literals not satisfied.
    #[default]
    GoalCount,
}

impl HeuristicNameV1 {
    pub const ALL: [Self; 2] = [Self::Blind, Self::GoalCount];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blind => "blind",
            Self::GoalCount => "goal-count",
        }
    }
}

impl fmt::Display for HeuristicNameV1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a heuristic selector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown heuristic `{0}` (expected one of: blind, goal-count)")]
pub struct UnknownHeuristic(pub String);

impl FromStr for HeuristicNameV1 {
    type Err = UnknownHeuristic;

    /// Case-insensitive; `_` and `-` are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|h| h.as_str() == key)
            .ok_or_else(|| UnknownHeuristic(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BlindHeuristic;

impl StateHeuristic for BlindHeuristic {
    fn estimate(&self, state: &StateV1, goal: &ConditionV1) -> f64 {
        if goal.holds_in(state) {
            0.0
        } else {
            1.0
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GoalCountHeuristic;

impl StateHeuristic for GoalCountHeuristic {
    #[allow(clippy::cast_precision_loss)]
    fn estimate(&self, state: &StateV1, goal: &ConditionV1) -> f64 {
        goal.unsatisfied_count(state) as f64
    }
}

/// Scales an inner oracle's estimate by a positive weight.
pub struct WeightedHeuristic {
    inner: Box<dyn StateHeuristic>,
    weight: f64,
}

impl WeightedHeuristic {
    #[must_use]
    pub fn new(inner: Box<dyn StateHeuristic>, weight: f64) -> Self {
        Self { inner, weight }
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl StateHeuristic for WeightedHeuristic {
    fn estimate(&self, state: &StateV1, goal: &ConditionV1) -> f64 {
        self.weight * self.inner.estimate(state, goal)
    }
}

/// Build the oracle selected by `name`, scaled by `weight`.
///
/// A weight of 1.0 returns the bare oracle.
#[must_use]
pub fn build_heuristic(name: HeuristicNameV1, weight: f64) -> Box<dyn StateHeuristic> {
    let inner: Box<dyn StateHeuristic> = match name {
        HeuristicNameV1::Blind => Box::new(BlindHeuristic),
        HeuristicNameV1::GoalCount => Box::new(GoalCountHeuristic),
    };
    if (weight - 1.0).abs() < f64::EPSILON {
        inner
    } else {
        Box::new(WeightedHeuristic::new(inner, weight))
    }
}
