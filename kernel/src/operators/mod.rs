//! Operators module: conditions, ground actions, and the `apply()` entry point.
//!
//! Depends on `carrier`. Does not import from `problem` or `proof::replay`.

pub mod action;
pub mod apply;
pub mod condition;
