//! Plugin-options loading.
//!
//! The CLI stands in for the host runner's plugin-options mechanism: a
//! TOML file (default `envbase.toml` in the workspace root) is
//! deserialized straight into [`PluginOptions`] and passed by value
//! into the scan call.  The core crate never sees config files.
//!
//! # Resolution order (highest priority first)
//!
//! 1. `--config <FILE>` (must exist when given explicitly)
//! 2. `<workspace-root>/envbase.toml` (absent file → defaults)
//! 3. Built-in defaults (everything optional)

use std::path::{Path, PathBuf};

use envbase_core::domain::PluginOptions;

use crate::error::{CliError, CliResult};

/// Default options-file name, resolved against the workspace root.
pub const DEFAULT_CONFIG_FILE: &str = "envbase.toml";

/// Load plugin options for one invocation.
///
/// An explicitly-passed file that is missing or unparseable is an
/// error; a missing file at the default location silently yields
/// defaults.
pub fn load_options(
    config_file: Option<&PathBuf>,
    workspace_root: &Path,
) -> CliResult<PluginOptions> {
    let (path, explicit) = match config_file {
        Some(path) => (path.clone(), true),
        None => (workspace_root.join(DEFAULT_CONFIG_FILE), false),
    };

    if !path.exists() {
        if explicit {
            return Err(CliError::ConfigError {
                message: format!("config file not found: {}", path.display()),
                source: None,
            });
        }
        return Ok(PluginOptions::default());
    }

    let raw = std::fs::read_to_string(&path).map_err(|e| CliError::ConfigError {
        message: format!("failed to read {}", path.display()),
        source: Some(Box::new(e)),
    })?;

    toml::from_str(&raw).map_err(|e| CliError::ConfigError {
        message: format!("failed to parse {}", path.display()),
        source: Some(Box::new(e)),
    })
}
