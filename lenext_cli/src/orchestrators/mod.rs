//! Command orchestrators for business logic
//!
//! Orchestrators sit between the clap layer and the core library: they
//! validate raw arguments, call into `lenext_core` and touch the filesystem.

pub mod forge_orchestrator;
