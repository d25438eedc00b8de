//! Domain layer - pure business logic, no external dependencies.
//!
//! Everything in here is deterministic and filesystem-free: the typed
//! project layout, the `project_id` rewrite rules, plugin option
//! resolution, and the task-definition data model. Filesystem access
//! happens exclusively behind the `Filesystem` port in the application
//! layer.

pub mod error;
pub mod layout;
pub mod options;
pub mod project_id;
pub mod task;

pub use error::DomainError;
pub use layout::{
    BASE_ENV, GENERATED_DIR, GITKEEP, MANIFEST_FILE, MARKER_FILE, ProjectLayout,
    is_environment_dir,
};
pub use options::{PluginOptions, ProjectOptions, TargetNames};
pub use task::{
    EXECUTOR_BUILD, EXECUTOR_GEN_TYPES, EXECUTOR_RUN_COMMAND, InferenceResult, ProjectDescriptor,
    TargetConfiguration, TargetOptions,
};
