//! mcplan harness: problem loading, fixture worlds, and the planner runner.
//!
//! The harness feeds ground problems to the search and checks what comes
//! back. It does NOT implement search logic; it delegates to
//! `mcplan_search`. Every plan it reports has passed kernel replay
//! verification.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod problem_file;
pub mod runner;
pub mod worlds;
