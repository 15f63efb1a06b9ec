//! Test utilities
//!
//! In-memory port implementations, mockall mocks and test fixtures.
//!
//! The in-memory repositories behave like the SQL adapters (existence checks,
//! ordering, unique emails) and are what most service and router tests use.
//! The mockall mocks exist for forcing storage failures.

pub mod database;
pub mod fixtures;
pub mod mocks;

pub use database::*;
pub use fixtures::*;
pub use mocks::*;
