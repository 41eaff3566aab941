//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The tracker mock is hand-written rather than generated: it records every
//! call so tests can assert on exact comment order and credentials.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
