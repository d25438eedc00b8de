//! Command handlers.
//!
//! Each submodule owns one subcommand: it wires adapters into the core
//! services, runs them, and translates outcomes into user-facing output.

pub mod build;
pub mod scan;
