//! `Stranded`: an unsolvable problem with no actions at all.
//!
//! The initial state is a dead end and the goal never holds, so every
//! iteration restarts and only the budget ends the search.

use mcplan_kernel::problem::requirement::RequirementV1;
use mcplan_kernel::problem::{ProblemBuilder, ProblemError, ProblemV1};

use crate::contract::PlanningWorldV1;

pub struct Stranded;

impl PlanningWorldV1 for Stranded {
    fn world_id(&self) -> String {
        "stranded".into()
    }

    fn build(&self) -> Result<ProblemV1, ProblemError> {
        let mut b = ProblemBuilder::new(self.world_id());
        let p = b.fact("p");
        let q = b.fact("q");
        b.require(RequirementV1::Strips).initially(p).goal_true(q);
        b.build()
    }
}
