//! Ground problem files: the JSON interchange format for [`ProblemV1`].
//!
//! A problem file names every fact up front; the initial state, the goal and
//! the actions then refer to facts by name. Loading is fail-closed: an
//! undeclared fact, an unknown requirement keyword or a duplicated action
//! name rejects the whole file.
//!
//! ```json
//! {
//!   "name": "two-fact",
//!   "requirements": [":strips"],
//!   "facts": ["p", "q"],
//!   "init": ["p"],
//!   "goal": { "positive": ["q"] },
//!   "actions": [
//!     { "name": "make_q",
//!       "precondition": { "positive": ["p"] },
//!       "effects": [{ "add": ["q"], "delete": ["p"] }] }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use mcplan_kernel::carrier::fact::{FactId, FactTableV1};
use mcplan_kernel::operators::action::{ActionV1, ConditionalEffectV1};
use mcplan_kernel::operators::condition::ConditionV1;
use mcplan_kernel::problem::requirement::{RequirementV1, UnknownRequirement};
use mcplan_kernel::problem::{ProblemBuilder, ProblemError, ProblemV1};

/// Failure to load a problem file.
#[derive(Debug, thiserror::Error)]
pub enum ProblemFileError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed problem file: {0}")]
    Json(#[from] serde_json::Error),
    /// A name used by `init`, `goal` or an action is missing from `facts`.
    #[error("{context} references undeclared fact `{name}`")]
    UndeclaredFact { context: String, name: String },
    #[error(transparent)]
    UnknownRequirement(#[from] UnknownRequirement),
    #[error(transparent)]
    Problem(#[from] ProblemError),
}

/// A condition written with fact names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConditionFileV1 {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub positive: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub negative: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EffectFileV1 {
    #[serde(default)]
    pub condition: ConditionFileV1,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub delete: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActionFileV1 {
    pub name: String,
    #[serde(default)]
    pub precondition: ConditionFileV1,
    #[serde(default)]
    pub effects: Vec<EffectFileV1>,
}

/// Top-level problem document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProblemFileV1 {
    pub name: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub facts: Vec<String>,
    #[serde(default)]
    pub init: Vec<String>,
    pub goal: ConditionFileV1,
    #[serde(default)]
    pub actions: Vec<ActionFileV1>,
}

impl ProblemFileV1 {
    /// Parse a problem document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ProblemFileError::Json`] on malformed JSON or an unknown field.
    pub fn parse(text: &str) -> Result<Self, ProblemFileError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a problem document.
    ///
    /// # Errors
    ///
    /// Returns [`ProblemFileError::Io`] if the file cannot be read, or
    /// [`ProblemFileError::Json`] if it cannot be parsed.
    pub fn read(path: &Path) -> Result<Self, ProblemFileError> {
        let text = std::fs::read_to_string(path).map_err(|source| ProblemFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Describe an existing problem with fact names.
    #[must_use]
    pub fn from_problem(problem: &ProblemV1) -> Self {
        let table = problem.facts();
        let names = |facts: &[FactId]| -> Vec<String> {
            facts
                .iter()
                .filter_map(|&f| table.name(f).map(str::to_string))
                .collect()
        };
        let condition = |c: &ConditionV1| ConditionFileV1 {
            positive: names(&c.positive),
            negative: names(&c.negative),
        };

        Self {
            name: problem.name().to_string(),
            requirements: problem
                .requirements()
                .iter()
                .map(ToString::to_string)
                .collect(),
            facts: table.names().map(str::to_string).collect(),
            init: names(&problem.initial_state().facts().collect::<Vec<_>>()),
            goal: condition(problem.goal()),
            actions: problem
                .actions()
                .iter()
                .map(|a| ActionFileV1 {
                    name: a.name().to_string(),
                    precondition: condition(a.precondition()),
                    effects: a
                        .effects()
                        .iter()
                        .map(|e| EffectFileV1 {
                            condition: condition(&e.condition),
                            add: names(&e.add),
                            delete: names(&e.delete),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    /// Ground the document into a validated [`ProblemV1`].
    ///
    /// # Errors
    ///
    /// - [`ProblemFileError::UnknownRequirement`] for an unrecognised keyword.
    /// - [`ProblemFileError::UndeclaredFact`] for a name missing from `facts`.
    /// - [`ProblemFileError::Problem`] if the builder rejects the result
    ///   (e.g. duplicate action names).
    pub fn into_problem(self) -> Result<ProblemV1, ProblemFileError> {
        let mut builder = ProblemBuilder::new(self.name);
        for keyword in &self.requirements {
            builder.require(keyword.parse::<RequirementV1>()?);
        }
        for fact in &self.facts {
            builder.fact(fact);
        }
        // Resolution goes through a frozen copy so that lookups never intern.
        let declared = declared_table(&self.facts);
        let resolve = |context: &str, names: &[String]| -> Result<Vec<FactId>, ProblemFileError> {
            names
                .iter()
                .map(|n| {
                    declared
                        .get(n)
                        .ok_or_else(|| ProblemFileError::UndeclaredFact {
                            context: context.to_string(),
                            name: n.clone(),
                        })
                })
                .collect()
        };
        let condition = |context: &str, c: &ConditionFileV1| -> Result<ConditionV1, ProblemFileError> {
            Ok(ConditionV1::all_of(resolve(context, &c.positive)?)
                .with_negative(resolve(context, &c.negative)?))
        };

        for fact in resolve("initial state", &self.init)? {
            builder.initially(fact);
        }
        let goal = condition("goal", &self.goal)?;
        for &fact in &goal.positive {
            builder.goal_true(fact);
        }
        for &fact in &goal.negative {
            builder.goal_false(fact);
        }

        for action in &self.actions {
            let context = format!("action `{}`", action.name);
            let precondition = condition(&context, &action.precondition)?;
            let effects = action
                .effects
                .iter()
                .map(|e| {
                    Ok(ConditionalEffectV1::when(
                        condition(&context, &e.condition)?,
                        resolve(&context, &e.add)?,
                        resolve(&context, &e.delete)?,
                    ))
                })
                .collect::<Result<Vec<_>, ProblemFileError>>()?;
            builder.action(ActionV1::new(action.name.clone(), precondition, effects));
        }

        Ok(builder.build()?)
    }
}

fn declared_table(facts: &[String]) -> FactTableV1 {
    let mut table = FactTableV1::new();
    for fact in facts {
        table.intern(fact);
    }
    table
}

/// Read, parse and ground a problem file in one step.
///
/// # Errors
///
/// See [`ProblemFileV1::read`] and [`ProblemFileV1::into_problem`].
pub fn load_problem(path: &Path) -> Result<ProblemV1, ProblemFileError> {
    let problem = ProblemFileV1::read(path)?.into_problem()?;
    tracing::debug!(
        path = %path.display(),
        problem = problem.name(),
        facts = problem.facts().len(),
        actions = problem.actions().len(),
        "loaded problem file"
    );
    Ok(problem)
}
