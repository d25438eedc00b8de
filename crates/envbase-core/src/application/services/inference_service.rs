//! Task inference engine.
//!
//! Given the marker paths a workspace scan produced, synthesizes one
//! [`ProjectDescriptor`] per surviving marker: the project's logical
//! name (from its `project.json` manifest) plus the full fixed task set,
//! with names, caching metadata and dependencies wired per the plugin
//! options.
//!
//! Scan results are recomputed snapshots - nothing is persisted between
//! calls.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{
        DomainError, EXECUTOR_BUILD, EXECUTOR_GEN_TYPES, EXECUTOR_RUN_COMMAND, GENERATED_DIR,
        InferenceResult, PluginOptions, ProjectDescriptor, ProjectLayout, TargetConfiguration,
        TargetNames, TargetOptions, is_environment_dir,
    },
    error::EnvbaseResult,
};

/// Deserialized `project.json` manifest. Only `name` is inspected;
/// unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct ProjectManifest {
    name: String,
}

/// Synthesizes task definitions from discovered marker files.
pub struct TaskInference {
    filesystem: Box<dyn Filesystem>,
}

impl TaskInference {
    /// Create an inference engine with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Run one inference pass over `marker_paths` (workspace-relative
    /// paths ending in `production/config.toml`).
    ///
    /// Markers that vanished since listing are skipped silently (benign
    /// race with concurrent filesystem changes); a project whose
    /// directory cannot be read is skipped with a warning. A missing or
    /// malformed manifest aborts the whole scan - the task graph cannot
    /// be synthesized without stable project identity.
    #[instrument(skip_all, fields(markers = marker_paths.len()))]
    pub fn scan(
        &self,
        marker_paths: &[PathBuf],
        options: &PluginOptions,
        workspace_root: &Path,
    ) -> EnvbaseResult<Vec<InferenceResult>> {
        let names = TargetNames::resolve(options);
        let mut results = Vec::new();

        for marker in marker_paths {
            let Some(project_root) = ProjectLayout::project_root_of_marker(marker) else {
                debug!(marker = %marker.display(), "ignoring path that is not a marker");
                continue;
            };

            // The caller-provided list may be stale; re-verify on disk.
            if !self.filesystem.exists(&workspace_root.join(marker)) {
                debug!(marker = %marker.display(), "marker vanished; skipping");
                continue;
            }

            let full_root = workspace_root.join(project_root);
            let name = self.resolve_project_name(&full_root)?;

            let layout = match self.filesystem.read_dir(&full_root) {
                Ok(entries) => ProjectLayout::new(
                    project_root,
                    entries
                        .into_iter()
                        .filter(|e| e.is_dir && is_environment_dir(&e.name))
                        .map(|e| e.name),
                ),
                Err(e) => {
                    warn!(
                        root = %full_root.display(),
                        error = %e,
                        "cannot read project directory; skipping project"
                    );
                    continue;
                }
            };

            let descriptor = ProjectDescriptor {
                name: name.clone(),
                root: project_root.to_path_buf(),
                targets: self.synthesize_targets(&layout, &names, options, &name),
            };

            let mut projects = BTreeMap::new();
            projects.insert(project_root.to_string_lossy().into_owned(), descriptor);
            results.push(InferenceResult {
                marker: marker.clone(),
                projects,
            });
        }

        debug!(projects = results.len(), "inference pass complete");
        Ok(results)
    }

    /// Read the logical name from the project's `project.json`.
    fn resolve_project_name(&self, full_root: &Path) -> EnvbaseResult<String> {
        let manifest_path = full_root.join(crate::domain::MANIFEST_FILE);
        if !self.filesystem.exists(&manifest_path) {
            return Err(ApplicationError::ManifestMissing {
                project_root: full_root.to_path_buf(),
            }
            .into());
        }

        let raw = self.filesystem.read_to_string(&manifest_path)?;
        let manifest: ProjectManifest =
            serde_json::from_str(&raw).map_err(|e| ApplicationError::ManifestInvalid {
                path: manifest_path.clone(),
                reason: e.to_string(),
            })?;

        if manifest.name.is_empty() {
            return Err(DomainError::EmptyProjectName {
                path: manifest_path.display().to_string(),
            }
            .into());
        }
        Ok(manifest.name)
    }

    /// Build the fixed task set for one project.
    fn synthesize_targets(
        &self,
        layout: &ProjectLayout,
        names: &TargetNames,
        options: &PluginOptions,
        logical_name: &str,
    ) -> BTreeMap<String, TargetConfiguration> {
        let mut targets = BTreeMap::new();

        // build: the only cacheable task; one input glob per environment
        // directory, base first.
        let inputs = layout
            .environment_names()
            .iter()
            .map(|env| format!("{{projectRoot}}/{env}/**/*"))
            .collect();
        targets.insert(
            names.build.clone(),
            TargetConfiguration {
                executor: EXECUTOR_BUILD.to_string(),
                cache: Some(true),
                inputs,
                outputs: vec![format!("{{projectRoot}}/{GENERATED_DIR}")],
                ..Default::default()
            },
        );

        let after_build = |task: TargetConfiguration| task.depends_on(names.build.clone());

        targets.insert(
            names.start.clone(),
            after_build(TargetConfiguration::command("supabase start")),
        );
        // stop tears down whatever is running; it must work even when no
        // build output exists.
        targets.insert(
            names.stop.clone(),
            TargetConfiguration::command("supabase stop --no-backup"),
        );
        targets.insert(
            names.status.clone(),
            after_build(TargetConfiguration::command("supabase status")),
        );
        targets.insert(
            names.db_reset.clone(),
            after_build(TargetConfiguration::command("supabase db reset")),
        );
        targets.insert(
            names.db_push.clone(),
            after_build(TargetConfiguration::command("supabase db push")),
        );
        targets.insert(
            names.db_pull.clone(),
            after_build(TargetConfiguration::command("supabase db pull")),
        );
        targets.insert(
            names.migration_new.clone(),
            after_build(TargetConfiguration::command("supabase migration new")),
        );
        targets.insert(
            names.db_diff.clone(),
            after_build(TargetConfiguration::command("supabase db diff")),
        );
        // link talks to a remote project; it needs no local build output.
        targets.insert(
            names.link.clone(),
            TargetConfiguration::command("supabase link"),
        );

        targets.insert(
            names.gen_types.clone(),
            after_build(TargetConfiguration {
                executor: EXECUTOR_GEN_TYPES.to_string(),
                options: TargetOptions {
                    command: None,
                    output_path: Some(options.gen_types_output_for(logical_name)),
                },
                ..Default::default()
            }),
        );

        // Bare command pass-through; the caller supplies the command at
        // invocation time.
        targets.insert(
            names.run_command.clone(),
            TargetConfiguration {
                executor: EXECUTOR_RUN_COMMAND.to_string(),
                ..Default::default()
            },
        );

        targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{DirEntry, MockFilesystem};
    use crate::error::EnvbaseError;

    fn marker() -> Vec<PathBuf> {
        vec![PathBuf::from("apps/db/production/config.toml")]
    }

    fn dir(name: &str) -> DirEntry {
        DirEntry {
            name: name.to_string(),
            is_dir: true,
        }
    }

    #[test]
    fn vanished_marker_is_skipped_silently() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);

        let engine = TaskInference::new(Box::new(fs));
        let results = engine
            .scan(&marker(), &PluginOptions::default(), Path::new("/ws"))
            .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn non_marker_path_is_ignored() {
        let fs = MockFilesystem::new();
        let engine = TaskInference::new(Box::new(fs));
        let results = engine
            .scan(
                &[PathBuf::from("apps/db/local/config.toml")],
                &PluginOptions::default(),
                Path::new("/ws"),
            )
            .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn missing_manifest_is_fatal() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| !p.ends_with("project.json"));

        let engine = TaskInference::new(Box::new(fs));
        let err = engine
            .scan(&marker(), &PluginOptions::default(), Path::new("/ws"))
            .unwrap_err();
        assert!(matches!(
            err,
            EnvbaseError::Application(ApplicationError::ManifestMissing { .. })
        ));
    }

    #[test]
    fn malformed_manifest_is_fatal() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_read_to_string()
            .returning(|_| Ok("{ not json".to_string()));

        let engine = TaskInference::new(Box::new(fs));
        let err = engine
            .scan(&marker(), &PluginOptions::default(), Path::new("/ws"))
            .unwrap_err();
        assert!(matches!(
            err,
            EnvbaseError::Application(ApplicationError::ManifestInvalid { .. })
        ));
    }

    #[test]
    fn empty_manifest_name_is_fatal() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_read_to_string()
            .returning(|_| Ok(r#"{"name": ""}"#.to_string()));

        let engine = TaskInference::new(Box::new(fs));
        let err = engine
            .scan(&marker(), &PluginOptions::default(), Path::new("/ws"))
            .unwrap_err();
        assert!(matches!(
            err,
            EnvbaseError::Domain(DomainError::EmptyProjectName { .. })
        ));
    }

    #[test]
    fn unreadable_project_dir_skips_project_only() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_read_to_string()
            .returning(|_| Ok(r#"{"name": "db"}"#.to_string()));
        fs.expect_read_dir().returning(|p| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into())
        });

        let engine = TaskInference::new(Box::new(fs));
        let results = engine
            .scan(&marker(), &PluginOptions::default(), Path::new("/ws"))
            .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn synthesizes_full_task_set() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_read_to_string()
            .returning(|_| Ok(r#"{"name": "db-production"}"#.to_string()));
        fs.expect_read_dir()
            .returning(|_| Ok(vec![dir("production"), dir("local"), dir(".generated")]));

        let engine = TaskInference::new(Box::new(fs));
        let results = engine
            .scan(&marker(), &PluginOptions::default(), Path::new("/ws"))
            .unwrap();

        assert_eq!(results.len(), 1);
        let descriptor = &results[0].projects["apps/db"];
        assert_eq!(descriptor.name, "db-production");
        assert_eq!(descriptor.root, PathBuf::from("apps/db"));

        let build = &descriptor.targets["build"];
        assert_eq!(build.executor, EXECUTOR_BUILD);
        assert_eq!(build.cache, Some(true));
        assert_eq!(
            build.inputs,
            [
                "{projectRoot}/production/**/*",
                "{projectRoot}/local/**/*"
            ]
        );
        assert_eq!(build.outputs, ["{projectRoot}/.generated"]);

        let start = &descriptor.targets["start"];
        assert_eq!(start.options.command.as_deref(), Some("supabase start"));
        assert_eq!(start.depends_on, ["build"]);

        // stop and link must not require a build.
        assert!(descriptor.targets["stop"].depends_on.is_empty());
        assert!(descriptor.targets["link"].depends_on.is_empty());
        assert!(descriptor.targets["run-command"].depends_on.is_empty());

        let gen_types = &descriptor.targets["gen-types"];
        assert_eq!(gen_types.executor, EXECUTOR_GEN_TYPES);
        assert_eq!(
            gen_types.options.output_path.as_deref(),
            Some("database.types.ts")
        );

        for task in ["status", "db-reset", "db-push", "db-pull", "migration-new", "db-diff"] {
            assert_eq!(descriptor.targets[task].depends_on, ["build"], "{task}");
        }
    }

    #[test]
    fn custom_target_names_rename_tasks() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_read_to_string()
            .returning(|_| Ok(r#"{"name": "db"}"#.to_string()));
        fs.expect_read_dir()
            .returning(|_| Ok(vec![dir("production")]));

        let options = PluginOptions {
            build_target_name: Some("compose".into()),
            start_target_name: Some("up".into()),
            ..Default::default()
        };
        let engine = TaskInference::new(Box::new(fs));
        let results = engine.scan(&marker(), &options, Path::new("/ws")).unwrap();

        let descriptor = &results[0].projects["apps/db"];
        assert!(descriptor.targets.contains_key("compose"));
        assert!(!descriptor.targets.contains_key("build"));
        assert_eq!(descriptor.targets["up"].depends_on, ["compose"]);
    }
}
