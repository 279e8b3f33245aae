//! Shared fixtures for predicate extraction tests and benchmarks.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
