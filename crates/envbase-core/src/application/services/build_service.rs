//! Environment build engine.
//!
//! Materializes every override environment as base + override under
//! `.generated/`, override wins on path collision. The base environment
//! is used in place and never copied (`.generated/production` does not
//! exist).
//!
//! The rebuild is destructive by design: each environment's output tree
//! is deleted and recreated from scratch, so an interrupted build is
//! repaired by the next run.

use std::path::Path;

use tracing::{error, info, instrument, warn};

use crate::{
    application::ports::Filesystem,
    domain::{
        BASE_ENV, GITKEEP, MARKER_FILE, ProjectLayout, is_environment_dir, project_id,
    },
    error::EnvbaseResult,
};

/// Aggregate result of one build invocation.
///
/// `success` is the only observable outcome; per-environment progress is
/// informational logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOutcome {
    pub success: bool,
    /// Number of override environments materialized.
    pub environments_built: usize,
}

/// Builds `.generated/<env>` trees for one project.
pub struct EnvironmentBuilder {
    filesystem: Box<dyn Filesystem>,
}

impl EnvironmentBuilder {
    /// Create a builder with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Build all override environments of the project at `project_root`.
    ///
    /// A missing base directory is a local failure: it is logged and
    /// reported as `success = false`, not returned as an error. I/O
    /// failures during the merge itself are fatal for the whole build
    /// (fail-fast, no per-environment retry) and propagate unchanged.
    #[instrument(skip(self), fields(root = %project_root.display()))]
    pub fn build(&self, project_root: &Path) -> EnvbaseResult<BuildOutcome> {
        let layout = self.discover_layout(project_root)?;

        if !self.filesystem.exists(&layout.base_dir()) {
            error!(
                base = %layout.base_dir().display(),
                "base environment directory not found"
            );
            return Ok(BuildOutcome {
                success: false,
                environments_built: 0,
            });
        }

        if layout.override_names().is_empty() {
            warn!("no override environments found; base environment needs no build step");
            return Ok(BuildOutcome {
                success: true,
                environments_built: 0,
            });
        }

        info!(environments = ?layout.override_names(), "building environments");

        for env in layout.override_names() {
            self.build_environment(&layout, env)?;
            info!(env = %env, "environment built");
        }

        Ok(BuildOutcome {
            success: true,
            environments_built: layout.override_names().len(),
        })
    }

    /// Enumerate immediate subdirectories and classify them as
    /// environments. The base directory check happens separately so a
    /// missing project root surfaces through the same path.
    fn discover_layout(&self, project_root: &Path) -> EnvbaseResult<ProjectLayout> {
        let names = if self.filesystem.exists(project_root) {
            self.filesystem
                .read_dir(project_root)?
                .into_iter()
                .filter(|e| e.is_dir && is_environment_dir(&e.name))
                .map(|e| e.name)
                .collect()
        } else {
            Vec::new()
        };
        Ok(ProjectLayout::new(project_root, names))
    }

    /// Materialize one override environment: clean, copy base, copy
    /// override (override wins), then rewrite the project identity.
    fn build_environment(&self, layout: &ProjectLayout, env: &str) -> EnvbaseResult<()> {
        let out_dir = layout.generated_env_dir(env);

        // Idempotent clean: stray files from earlier builds must not survive.
        if self.filesystem.exists(&out_dir) {
            self.filesystem.remove_dir_all(&out_dir)?;
        }
        self.filesystem.create_dir_all(&out_dir)?;

        self.copy_tree(&layout.base_dir(), &out_dir)?;
        self.copy_tree(&layout.override_dir(env), &out_dir)?;

        self.rewrite_identity(&out_dir.join(MARKER_FILE), env)?;
        Ok(())
    }

    /// Recursively copy every file from `source` into `destination`,
    /// overwriting on collision and skipping `.gitkeep` markers.
    /// Directory structure, including empty directories, is preserved.
    fn copy_tree(&self, source: &Path, destination: &Path) -> EnvbaseResult<()> {
        if !self.filesystem.exists(source) {
            return Ok(());
        }

        for entry in self.filesystem.read_dir(source)? {
            let from = source.join(&entry.name);
            let to = destination.join(&entry.name);

            if entry.is_dir {
                self.filesystem.create_dir_all(&to)?;
                self.copy_tree(&from, &to)?;
            } else {
                if entry.name == GITKEEP {
                    continue;
                }
                self.filesystem.copy_file(&from, &to)?;
            }
        }
        Ok(())
    }

    /// Rewrite `project_id` in a materialized config file, if present.
    ///
    /// `foo-production` becomes `foo-<env>`; the base environment itself
    /// is never rewritten because it is never materialized.
    fn rewrite_identity(&self, config_path: &Path, env: &str) -> EnvbaseResult<()> {
        debug_assert_ne!(env, BASE_ENV);
        if !self.filesystem.exists(config_path) {
            return Ok(());
        }
        let content = self.filesystem.read_to_string(config_path)?;
        let rewritten = project_id::rewrite(&content, env);
        if rewritten != content {
            self.filesystem.write_file(config_path, &rewritten)?;
        }
        Ok(())
    }
}
