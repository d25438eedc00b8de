//! Plugin options supplied by the host task runner.
//!
//! Options arrive once per scan call as an explicit value - there is no
//! process-wide configuration singleton. All fields are optional; the
//! key names mirror the host's camelCase option map.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::project_id::strip_base_suffix;

/// Default output file for generated type artifacts.
pub const DEFAULT_GEN_TYPES_OUTPUT: &str = "database.types.ts";

/// Per-scan plugin options.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PluginOptions {
    pub build_target_name: Option<String>,
    pub start_target_name: Option<String>,
    pub stop_target_name: Option<String>,
    pub run_command_target_name: Option<String>,
    pub status_target_name: Option<String>,
    pub db_reset_target_name: Option<String>,
    pub db_push_target_name: Option<String>,
    pub db_pull_target_name: Option<String>,
    pub gen_types_target_name: Option<String>,
    pub migration_new_target_name: Option<String>,
    pub link_target_name: Option<String>,
    pub db_diff_target_name: Option<String>,

    /// Global output path for generated types; overridden per project.
    pub gen_types_output_path: Option<String>,

    /// Per-project overrides, keyed by logical name *without* the
    /// `-production` suffix.
    pub projects: BTreeMap<String, ProjectOptions>,
}

/// Options scoped to one project.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectOptions {
    pub gen_types_output_path: Option<String>,
}

impl PluginOptions {
    /// Resolve the gen-types output path for a project.
    ///
    /// Precedence: per-project entry (looked up by logical name with a
    /// trailing `-production` stripped) > global option > built-in
    /// default.
    pub fn gen_types_output_for(&self, logical_name: &str) -> String {
        let key = strip_base_suffix(logical_name);
        self.projects
            .get(key)
            .and_then(|p| p.gen_types_output_path.clone())
            .or_else(|| self.gen_types_output_path.clone())
            .unwrap_or_else(|| DEFAULT_GEN_TYPES_OUTPUT.to_string())
    }
}

/// Fully-resolved task names, defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetNames {
    pub build: String,
    pub start: String,
    pub stop: String,
    pub run_command: String,
    pub status: String,
    pub db_reset: String,
    pub db_push: String,
    pub db_pull: String,
    pub gen_types: String,
    pub migration_new: String,
    pub link: String,
    pub db_diff: String,
}

impl TargetNames {
    /// Apply option overrides on top of the default names.
    pub fn resolve(options: &PluginOptions) -> Self {
        fn pick(custom: &Option<String>, default: &str) -> String {
            custom.clone().unwrap_or_else(|| default.to_string())
        }
        Self {
            build: pick(&options.build_target_name, "build"),
            start: pick(&options.start_target_name, "start"),
            stop: pick(&options.stop_target_name, "stop"),
            run_command: pick(&options.run_command_target_name, "run-command"),
            status: pick(&options.status_target_name, "status"),
            db_reset: pick(&options.db_reset_target_name, "db-reset"),
            db_push: pick(&options.db_push_target_name, "db-push"),
            db_pull: pick(&options.db_pull_target_name, "db-pull"),
            gen_types: pick(&options.gen_types_target_name, "gen-types"),
            migration_new: pick(&options.migration_new_target_name, "migration-new"),
            link: pick(&options.link_target_name, "link"),
            db_diff: pick(&options.db_diff_target_name, "db-diff"),
        }
    }
}
