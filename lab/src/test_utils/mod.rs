//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The explainer mock is hand-written rather than generated: it records every
//! request it sees so tests can assert on prompts as well as on results.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
