//! envbase core - hexagonal architecture implementation.
//!
//! This crate provides the domain and application layers for envbase,
//! the multi-environment build and task-inference core for
//! database-platform projects inside a monorepo task runner.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          envbase-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (EnvironmentBuilder, TaskInference)   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │            (Filesystem)                 │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    envbase-adapters (Infrastructure)    │
//! │ (LocalFilesystem, MemoryFilesystem, …)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ProjectLayout, project_id, TaskDefs)   │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use envbase_core::application::EnvironmentBuilder;
//! # fn adapters() -> Box<dyn envbase_core::application::Filesystem> { unimplemented!() }
//!
//! let builder = EnvironmentBuilder::new(adapters());
//! let outcome = builder.build(std::path::Path::new("apps/my-db")).unwrap();
//! assert!(outcome.success);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BuildOutcome, EnvironmentBuilder, TaskInference,
        ports::{DirEntry, Filesystem},
    };
    pub use crate::domain::{
        InferenceResult, PluginOptions, ProjectDescriptor, ProjectLayout, TargetConfiguration,
        TargetNames,
    };
    pub use crate::error::{EnvbaseError, EnvbaseResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
