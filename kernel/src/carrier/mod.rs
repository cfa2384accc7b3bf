//! Carrier module: facts and the `StateV1` fact-set.
//!
//! This is the foundational layer. Only `proof::hash` is imported here (for
//! state fingerprints).

pub mod fact;
pub mod state;
