//! Typed project layout.
//!
//! The directory-tree shape (`production/` + override environments +
//! `.generated/`) is an implicit schema; [`ProjectLayout`] makes it an
//! explicit value so the build engine and the inference engine agree on
//! which directories count as environments.
//!
//! # Directory layout expected
//!
//! ```text
//! my-db/
//! ├── production/              ← base environment (always present)
//! │   ├── config.toml          ← marker file; carries project_id
//! │   ├── migrations/
//! │   └── seeds/
//! ├── local/                   ← override environment
//! │   └── seeds/dev-users.sql
//! ├── staging/                 ← override environment
//! └── .generated/              ← build output, owned by the build engine
//!     ├── local/
//!     └── staging/
//! ```

use std::path::{Path, PathBuf};

/// Name of the base environment directory.
pub const BASE_ENV: &str = "production";

/// Name of the generated-output directory.
pub const GENERATED_DIR: &str = ".generated";

/// Marker file that signals a valid project under `production/`.
pub const MARKER_FILE: &str = "config.toml";

/// Adjacent manifest file carrying the logical project name.
pub const MANIFEST_FILE: &str = "project.json";

/// Placeholder files kept out of generated output.
pub const GITKEEP: &str = ".gitkeep";

/// Environment-directory rule shared by both engines: the generated
/// output directory and dot-prefixed directories are never environments.
pub fn is_environment_dir(name: &str) -> bool {
    name != GENERATED_DIR && !name.starts_with('.')
}

/// Typed view of one project directory tree.
///
/// Constructed from a project root plus the already-enumerated list of
/// environment directory names; construction itself touches no
/// filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    /// Override environment names, in enumeration order. Never contains
    /// [`BASE_ENV`].
    overrides: Vec<String>,
}

impl ProjectLayout {
    /// Build a layout from a project root and the names of its immediate
    /// subdirectories. Non-environment names (generated output, hidden
    /// directories) and the base environment are filtered here so callers
    /// can pass a raw directory listing.
    pub fn new(root: impl Into<PathBuf>, dir_names: impl IntoIterator<Item = String>) -> Self {
        let overrides = dir_names
            .into_iter()
            .filter(|n| is_environment_dir(n) && n != BASE_ENV)
            .collect();
        Self {
            root: root.into(),
            overrides,
        }
    }

    /// Path of the base environment directory (`production/`).
    pub fn base_dir(&self) -> PathBuf {
        self.root.join(BASE_ENV)
    }

    /// Generated-output root (`.generated/`).
    pub fn generated_dir(&self) -> PathBuf {
        self.root.join(GENERATED_DIR)
    }

    /// Output directory for one materialized environment.
    pub fn generated_env_dir(&self, env: &str) -> PathBuf {
        self.generated_dir().join(env)
    }

    /// Source directory of one override environment.
    pub fn override_dir(&self, env: &str) -> PathBuf {
        self.root.join(env)
    }

    /// Override environment names (excludes the base environment).
    pub fn override_names(&self) -> &[String] {
        &self.overrides
    }

    /// All environment names, base first. This is the set used for
    /// file-watch input globs.
    pub fn environment_names(&self) -> Vec<&str> {
        let mut names = vec![BASE_ENV];
        names.extend(self.overrides.iter().map(String::as_str));
        names
    }

    /// Derive the project root from a marker path by removing the last
    /// two segments (`production/config.toml`).
    pub fn project_root_of_marker(marker: &Path) -> Option<&Path> {
        if marker.file_name()? != MARKER_FILE {
            return None;
        }
        let env_dir = marker.parent()?;
        if env_dir.file_name()? != BASE_ENV {
            return None;
        }
        env_dir.parent()
    }
}
