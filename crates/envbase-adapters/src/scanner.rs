//! Workspace scanner.
//!
//! Discovers marker files matching `**/production/config.toml`. This
//! stands in for the host runner's glob matcher so the CLI and tests
//! can drive a full scan-then-infer pass without a host.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};
use walkdir::WalkDir;

use envbase_core::{
    application::ApplicationError,
    domain::{BASE_ENV, GENERATED_DIR, MARKER_FILE},
    error::EnvbaseResult,
};

/// Directories never descended into during a scan.
const PRUNED_DIRS: &[&str] = &[GENERATED_DIR, "node_modules", "target"];

/// Finds project marker files beneath a workspace root.
pub struct WorkspaceScanner {
    workspace_root: PathBuf,
}

impl WorkspaceScanner {
    /// Create a scanner rooted at `workspace_root`.
    pub fn new(workspace_root: impl Into<PathBuf>) -> Self {
        Self {
            workspace_root: workspace_root.into(),
        }
    }

    /// Collect workspace-relative paths of every `production/config.toml`.
    ///
    /// Hidden directories, generated output, and dependency/build
    /// directories are pruned. Results are sorted for deterministic
    /// output.
    #[instrument(skip(self), fields(root = %self.workspace_root.display()))]
    pub fn find_markers(&self) -> EnvbaseResult<Vec<PathBuf>> {
        let mut markers = Vec::new();

        let walker = WalkDir::new(&self.workspace_root)
            .min_depth(1)
            .into_iter()
            .filter_entry(|e| !is_pruned(e.file_name().to_string_lossy().as_ref()));

        for entry in walker {
            let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                path: self.workspace_root.clone(),
                reason: format!("Failed to walk workspace: {e}"),
            })?;

            if !entry.file_type().is_file() || entry.file_name() != MARKER_FILE {
                continue;
            }
            let Some(parent) = entry.path().parent() else {
                continue;
            };
            if parent.file_name().map(|n| n == BASE_ENV) != Some(true) {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&self.workspace_root)
                .unwrap_or(entry.path())
                .to_path_buf();
            debug!(marker = %relative.display(), "found project marker");
            markers.push(relative);
        }

        markers.sort();
        Ok(markers)
    }
}

/// Pruning rule: dot-prefixed names and known heavyweight directories
/// are skipped entirely, at any depth.
fn is_pruned(name: &str) -> bool {
    name.starts_with('.') || PRUNED_DIRS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn finds_markers_in_nested_projects() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "apps/db-a/production/config.toml");
        touch(temp.path(), "apps/nested/db-b/production/config.toml");
        touch(temp.path(), "apps/db-a/production/migrations/001.sql");

        let markers = WorkspaceScanner::new(temp.path()).find_markers().unwrap();
        assert_eq!(
            markers,
            [
                PathBuf::from("apps/db-a/production/config.toml"),
                PathBuf::from("apps/nested/db-b/production/config.toml"),
            ]
        );
    }

    #[test]
    fn ignores_config_outside_production_dirs() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "apps/db/local/config.toml");
        touch(temp.path(), "apps/db/config.toml");

        let markers = WorkspaceScanner::new(temp.path()).find_markers().unwrap();
        assert!(markers.is_empty());
    }

    #[test]
    fn prunes_generated_hidden_and_dependency_dirs() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "apps/db/.generated/production/config.toml");
        touch(temp.path(), ".cache/db/production/config.toml");
        touch(temp.path(), "node_modules/pkg/production/config.toml");
        touch(temp.path(), "apps/db/production/config.toml");

        let markers = WorkspaceScanner::new(temp.path()).find_markers().unwrap();
        assert_eq!(markers, [PathBuf::from("apps/db/production/config.toml")]);
    }

    #[test]
    fn empty_workspace_yields_no_markers() {
        let temp = TempDir::new().unwrap();
        let markers = WorkspaceScanner::new(temp.path()).find_markers().unwrap();
        assert!(markers.is_empty());
    }
}
