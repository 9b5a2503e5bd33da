//! Mock implementations for testing

mod oracle;

pub use oracle::KeyedMacOracle;
