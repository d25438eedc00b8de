//! Infrastructure adapters for envbase.
//!
//! Implements the ports defined in `envbase-core` plus the
//! workspace-scanning collaborator the host task runner would normally
//! provide.

pub mod filesystem;
pub mod scanner;

pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use scanner::WorkspaceScanner;
