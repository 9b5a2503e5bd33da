//! Library surface of the `lenext` command line tool
//!
//! The binary is a thin clap front end over these modules so that the
//! forging flow, configuration and output formatting can be tested directly.

pub mod config;
pub mod error;
pub mod orchestrators;
pub mod output;
pub mod terminal;
