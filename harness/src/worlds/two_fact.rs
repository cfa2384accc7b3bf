//! `TwoFact`: the smallest solvable problem.
//!
//! Facts `p` and `q`; `p` holds initially, the goal is `q`, and the single
//! action `make_q` turns `p` into `q`. Every walk of at least one step
//! reaches the goal, so the plan is `[make_q]` for any seed.

use mcplan_kernel::operators::action::ActionV1;
use mcplan_kernel::operators::condition::ConditionV1;
use mcplan_kernel::problem::requirement::RequirementV1;
use mcplan_kernel::problem::{ProblemBuilder, ProblemError, ProblemV1};

use crate::contract::PlanningWorldV1;

pub struct TwoFact;

impl PlanningWorldV1 for TwoFact {
    fn world_id(&self) -> String {
        "two-fact".into()
    }

    fn build(&self) -> Result<ProblemV1, ProblemError> {
        let mut b = ProblemBuilder::new(self.world_id());
        let p = b.fact("p");
        let q = b.fact("q");
        b.require(RequirementV1::Strips).initially(p).goal_true(q);
        b.action(ActionV1::strips(
            "make_q",
            ConditionV1::all_of([p]),
            vec![q],
            vec![p],
        ));
        b.build()
    }
}
