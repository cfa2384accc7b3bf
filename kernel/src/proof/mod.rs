//! Proof module: canonical hashing and plan replay verification.
//!
//! `hash` is a leaf (the carrier uses it for state fingerprints). `replay`
//! depends on `carrier`, `operators` and `problem`.

pub mod hash;
pub mod replay;
