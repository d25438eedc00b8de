//! Application layer for envbase.
//!
//! This layer contains:
//! - **Services**: the environment build engine and the task inference
//!   engine
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer orchestrates the domain layer but contains no
//! business rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{BuildOutcome, EnvironmentBuilder, TaskInference};

pub use ports::{DirEntry, Filesystem};

pub use error::ApplicationError;
