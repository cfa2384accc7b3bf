//! `Gripper`: the classic two-room ball-transport benchmark, ground.
//!
//! A robot with two grippers starts in `rooma` with `balls` balls. The
//! goal is every ball in `roomb`. Ground actions:
//!
//! - `move <from> <to>`
//! - `pick <ball> <room> <gripper>`
//! - `drop <ball> <room> <gripper>`
//!
//! The optimal plan length for `n` balls is `2n + 2(n/2) - 1` steps for
//! even `n` (pairs carried together).

use mcplan_kernel::operators::action::ActionV1;
use mcplan_kernel::operators::condition::ConditionV1;
use mcplan_kernel::problem::requirement::RequirementV1;
use mcplan_kernel::problem::{ProblemBuilder, ProblemError, ProblemV1};

use crate::contract::PlanningWorldV1;

const ROOMS: [&str; 2] = ["rooma", "roomb"];
const GRIPPERS: [&str; 2] = ["left", "right"];

/// Gripper instance with `balls` balls.
#[derive(Debug, Clone, Copy)]
pub struct Gripper {
    balls: usize,
}

impl Gripper {
    #[must_use]
    pub fn new(balls: usize) -> Self {
        Self { balls }
    }

    #[must_use]
    pub fn balls(&self) -> usize {
        self.balls
    }
}

impl PlanningWorldV1 for Gripper {
    fn world_id(&self) -> String {
        format!("gripper-{}", self.balls)
    }

    fn build(&self) -> Result<ProblemV1, ProblemError> {
        let mut b = ProblemBuilder::new(self.world_id());
        b.require(RequirementV1::Strips);

        let balls: Vec<String> = (1..=self.balls).map(|i| format!("ball{i}")).collect();
        let at_robby = ROOMS.map(|r| b.fact(&format!("at-robby {r}")));
        let free = GRIPPERS.map(|g| b.fact(&format!("free {g}")));
        let at: Vec<[_; 2]> = balls
            .iter()
            .map(|ball| ROOMS.map(|r| b.fact(&format!("at {ball} {r}"))))
            .collect();
        let carry: Vec<[_; 2]> = balls
            .iter()
            .map(|ball| GRIPPERS.map(|g| b.fact(&format!("carry {ball} {g}"))))
            .collect();

        b.initially(at_robby[0]);
        for &gripper in &free {
            b.initially(gripper);
        }
        for ball in &at {
            b.initially(ball[0]).goal_true(ball[1]);
        }

        for (from, to) in [(0, 1), (1, 0)] {
            b.action(ActionV1::strips(
                format!("move {} {}", ROOMS[from], ROOMS[to]),
                ConditionV1::all_of([at_robby[from]]),
                vec![at_robby[to]],
                vec![at_robby[from]],
            ));
        }
        for (i, ball) in balls.iter().enumerate() {
            for (r, room) in ROOMS.iter().enumerate() {
                for (g, gripper) in GRIPPERS.iter().enumerate() {
                    b.action(ActionV1::strips(
                        format!("pick {ball} {room} {gripper}"),
                        ConditionV1::all_of([at[i][r], at_robby[r], free[g]]),
                        vec![carry[i][g]],
                        vec![at[i][r], free[g]],
                    ));
                    b.action(ActionV1::strips(
                        format!("drop {ball} {room} {gripper}"),
                        ConditionV1::all_of([carry[i][g], at_robby[r]]),
                        vec![at[i][r], free[g]],
                        vec![carry[i][g]],
                    ));
                }
            }
        }
        b.build()
    }
}
