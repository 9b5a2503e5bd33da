//! Builders for test scenarios

mod scenario;

pub use scenario::{ForgeryScenario, ForgeryScenarioBuilder};
