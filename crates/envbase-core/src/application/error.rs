//! Application layer errors.
//!
//! These errors represent orchestration failures around the two engines.
//! Pure rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during build or scan orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed. Low-level I/O failures during the
    /// merge step are not caught locally; they surface through here to
    /// the host runner as a task failure.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// No `project.json` next to a discovered project. Fatal: a task
    /// graph cannot be synthesized without a stable logical name.
    #[error("Missing project.json manifest for project at {project_root}")]
    ManifestMissing { project_root: PathBuf },

    /// The manifest exists but could not be parsed, or lacks a name.
    #[error("Invalid project manifest at {path}: {reason}")]
    ManifestInvalid { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::ManifestMissing { project_root } => vec![
                format!(
                    "Create {} with a \"name\" property",
                    project_root.join("project.json").display()
                ),
                "Every project needs a stable logical name for the task graph".into(),
            ],
            Self::ManifestInvalid { path, .. } => vec![
                format!("Fix the JSON in: {}", path.display()),
                "The manifest must contain at least: {\"name\": \"<project-name>\"}".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::ManifestMissing { .. } => ErrorCategory::NotFound,
            Self::ManifestInvalid { .. } => ErrorCategory::Configuration,
        }
    }
}
