//! Fixture worlds for the planner runner and acceptance tests.

pub mod gripper;
pub mod stranded;
pub mod trapdoor;
pub mod two_fact;

use crate::contract::PlanningWorldV1;

/// Look up a built-in world by CLI name. `balls` only affects `gripper`.
#[must_use]
pub fn world_by_name(name: &str, balls: usize) -> Option<Box<dyn PlanningWorldV1>> {
    match name {
        "two-fact" => Some(Box::new(two_fact::TwoFact)),
        "gripper" => Some(Box::new(gripper::Gripper::new(balls))),
        "trapdoor" => Some(Box::new(trapdoor::Trapdoor)),
        "stranded" => Some(Box::new(stranded::Stranded)),
        _ => None,
    }
}

/// CLI names accepted by [`world_by_name`].
pub const WORLD_NAMES: [&str; 4] = ["two-fact", "gripper", "trapdoor", "stranded"];
