//! World contract: the minimal trait a fixture world implements.
//!
//! Worlds provide ground problem data only. They may NOT run search, verify
//! plans, or choose tunables (runner concerns).

use mcplan_kernel::problem::{ProblemError, ProblemV1};

/// A named, parameter-free generator of a ground problem.
pub trait PlanningWorldV1 {
    /// Unique world identifier (e.g., `"gripper-4"`).
    fn world_id(&self) -> String;

    /// Ground the world into a problem.
    ///
    /// # Errors
    ///
    /// Returns [`ProblemError`] if the generated problem is malformed.
    fn build(&self) -> Result<ProblemV1, ProblemError>;
}
