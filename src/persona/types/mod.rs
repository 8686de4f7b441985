//! Foundational data structures, error types, and axis derivations.

pub mod axis;
pub mod error;
pub mod models;
