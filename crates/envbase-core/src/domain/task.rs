//! Task definitions emitted to the host scheduler.
//!
//! These types are pure data - no behavior. They serialize to the
//! camelCase descriptor shape the host's project-graph consumer expects.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

/// Executor id for the environment build task.
pub const EXECUTOR_BUILD: &str = "envbase:build";
/// Executor id for wrapped-CLI command tasks.
pub const EXECUTOR_RUN_COMMAND: &str = "envbase:run-command";
/// Executor id for the type-generation task.
pub const EXECUTOR_GEN_TYPES: &str = "envbase:gen-types";

/// Static option payload carried by a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetOptions {
    /// Literal wrapped-CLI command, e.g. `supabase start`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Resolved output path for generated artifacts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
}

impl TargetOptions {
    pub fn is_empty(&self) -> bool {
        self.command.is_none() && self.output_path.is_none()
    }
}

/// One named task: executor, static options, inputs/outputs, cache
/// eligibility and ordering dependencies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetConfiguration {
    pub executor: String,
    #[serde(skip_serializing_if = "TargetOptions::is_empty")]
    pub options: TargetOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
}

impl TargetConfiguration {
    /// A wrapped-CLI command task.
    pub fn command(command: impl Into<String>) -> Self {
        Self {
            executor: EXECUTOR_RUN_COMMAND.to_string(),
            options: TargetOptions {
                command: Some(command.into()),
                output_path: None,
            },
            ..Default::default()
        }
    }

    /// Add an ordering dependency on another task name.
    pub fn depends_on(mut self, task: impl Into<String>) -> Self {
        self.depends_on.push(task.into());
        self
    }
}

/// One discovered project: logical name, root path, synthesized tasks.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDescriptor {
    pub name: String,
    pub root: PathBuf,
    pub targets: BTreeMap<String, TargetConfiguration>,
}

/// One scan result entry: the marker file paired with a single-project
/// map keyed by project root.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceResult {
    pub marker: PathBuf,
    pub projects: BTreeMap<String, ProjectDescriptor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_task_carries_literal_command() {
        let task = TargetConfiguration::command("supabase start").depends_on("build");
        assert_eq!(task.executor, EXECUTOR_RUN_COMMAND);
        assert_eq!(task.options.command.as_deref(), Some("supabase start"));
        assert_eq!(task.depends_on, ["build"]);
    }

    #[test]
    fn serializes_camel_case_and_skips_empty_fields() {
        let task = TargetConfiguration {
            executor: EXECUTOR_BUILD.to_string(),
            cache: Some(true),
            inputs: vec!["{projectRoot}/production/**/*".into()],
            outputs: vec!["{projectRoot}/.generated".into()],
            ..Default::default()
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["executor"], "envbase:build");
        assert_eq!(json["cache"], true);
        assert!(json.get("options").is_none());
        assert!(json.get("dependsOn").is_none());
    }

    #[test]
    fn depends_on_uses_camel_case_key() {
        let task = TargetConfiguration::command("supabase status").depends_on("build");
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["dependsOn"][0], "build");
        assert!(json.get("depends_on").is_none());
    }
}
