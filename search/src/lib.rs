//! mcplan search: Monte-Carlo random-walk planning over ground problems.
//!
//! This crate provides the search layer. It depends only on `mcplan_kernel`;
//! it does NOT depend on `mcplan_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! mcplan_kernel  ←  mcplan_search  ←  mcplan_harness
//! (states, actions)  (walks, restarts)   (problem files, runner, CLI)
//! ```
//!
//! # Key types
//!
//! - [`SearchNodeV1`](node::SearchNodeV1) -- immutable node with a shared parent chain
//! - [`StateHeuristic`](heuristic::StateHeuristic) -- the heuristic oracle seam
//! - [`MrwPolicyV1`](policy::MrwPolicyV1) -- walk tunables, stall threshold and budget
//! - [`random_walk`](walk::random_walk) -- one batch of bounded random walks
//! - [`MonteCarloSearch`](search::MonteCarloSearch) -- the restart state machine
//! - [`PlanV1`](plan::PlanV1) -- extracted action sequence

#![forbid(unsafe_code)]

pub mod error;
pub mod heuristic;
pub mod node;
pub mod plan;
pub mod policy;
pub mod search;
pub mod walk;
