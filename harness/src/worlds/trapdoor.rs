//! `Trapdoor`: a corridor with a one-way pit beside every cell.
//!
//! Cells `c0..=c{len}`; the robot starts in `c0` and must reach the last
//! cell. From each cell it may step forward (`advance-i`) or drop through
//! a trapdoor into the pit (`fall-i`). The pit has no outgoing actions and
//! does not lower the goal-count estimate, so walks that fall are dead ends
//! and a search that settles in the pit must restart.
//!
//! The `at-goal` flag is set only by the final `advance`, giving the
//! goal-count heuristic no gradient until the goal itself is hit.

use mcplan_kernel::operators::action::ActionV1;
use mcplan_kernel::operators::condition::ConditionV1;
use mcplan_kernel::problem::requirement::RequirementV1;
use mcplan_kernel::problem::{ProblemBuilder, ProblemError, ProblemV1};

use crate::contract::PlanningWorldV1;

/// Number of `advance` steps between the start and the goal cell.
pub const CORRIDOR_LENGTH: usize = 3;

pub struct Trapdoor;

impl PlanningWorldV1 for Trapdoor {
    fn world_id(&self) -> String {
        "trapdoor".into()
    }

    fn build(&self) -> Result<ProblemV1, ProblemError> {
        let mut b = ProblemBuilder::new(self.world_id());
        b.require(RequirementV1::Strips);
        let cells: Vec<_> = (0..=CORRIDOR_LENGTH)
            .map(|i| b.fact(&format!("at c{i}")))
            .collect();
        let pit = b.fact("in pit");
        let goal = b.fact("at-goal");
        b.initially(cells[0]).goal_true(goal);

        for i in 0..CORRIDOR_LENGTH {
            let mut add = vec![cells[i + 1]];
            if i + 1 == CORRIDOR_LENGTH {
                add.push(goal);
            }
            b.action(ActionV1::strips(
                format!("advance-{i}"),
                ConditionV1::all_of([cells[i]]),
                add,
                vec![cells[i]],
            ));
            b.action(ActionV1::strips(
                format!("fall-{i}"),
                ConditionV1::all_of([cells[i]]),
                vec![pit],
                vec![cells[i]],
            ));
        }
        b.build()
    }
}
