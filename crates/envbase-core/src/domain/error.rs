use thiserror::Error;

use crate::error::ErrorCategory;

/// Domain rule violations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The project manifest declared an empty logical name.
    #[error("Project manifest at '{path}' has an empty name")]
    EmptyProjectName { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyProjectName { path } => vec![
                format!("Check the manifest at: {}", path),
                "Set a non-empty \"name\" property".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}
