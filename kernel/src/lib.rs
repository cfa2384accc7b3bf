//! mcplan kernel: the deterministic ground-planning core.
//!
//! # API Surface
//!
//! - [`carrier::state::StateV1`] -- immutable fact-set state with conditional effect application
//! - [`operators::apply::apply`] -- checked application of a ground action
//! - [`problem::ProblemV1`] -- ground problem (facts, initial state, goal, action table)
//! - [`proof::replay::replay_verify`] -- verify a plan by deterministic replay
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `operators` ← `problem` ← `proof`
//!
//! One-way only. No cycles. `carrier` depends on nothing internal except the
//! hashing primitives in `proof::hash`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod operators;
pub mod problem;
pub mod proof;
