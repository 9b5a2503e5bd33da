//! Test utilities for the MD5 length-extension workspace
//!
//! This crate provides a keyed-MAC oracle standing in for the victim service,
//! and builders for forgery scenarios.

pub mod builders;
pub mod mocks;

// Re-export commonly used types
pub use builders::{ForgeryScenario, ForgeryScenarioBuilder};
pub use mocks::KeyedMacOracle;
