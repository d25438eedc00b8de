//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `envbase-adapters` crate provides implementations.

use crate::error::EnvbaseResult;
use std::path::Path;

/// One entry returned by [`Filesystem::read_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Final path component, not the full path.
    pub name: String,
    pub is_dir: bool,
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `envbase_adapters::filesystem::LocalFilesystem` (production)
/// - `envbase_adapters::filesystem::MemoryFilesystem` (testing)
///
/// All operations are synchronous; both engines are single-threaded per
/// invocation and callers own any cross-project parallelism.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> EnvbaseResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> EnvbaseResult<()>;

    /// Read a file's entire content as UTF-8.
    fn read_to_string(&self, path: &Path) -> EnvbaseResult<String>;

    /// Copy one file, replacing the destination if present.
    fn copy_file(&self, from: &Path, to: &Path) -> EnvbaseResult<()>;

    /// List the immediate children of a directory.
    fn read_dir(&self, path: &Path) -> EnvbaseResult<Vec<DirEntry>>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> EnvbaseResult<()>;
}
