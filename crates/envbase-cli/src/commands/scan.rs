//! The `scan` command - discover projects and print inferred tasks.

use tracing::{debug, instrument};

use envbase_adapters::{filesystem::LocalFilesystem, scanner::WorkspaceScanner};
use envbase_core::application::TaskInference;

use crate::{
    cli::{GlobalArgs, ScanArgs},
    config::load_options,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `scan` command.
///
/// The JSON document goes to stdout; all status lines go to stderr so
/// the output can be piped into the host runner unmodified.
#[instrument(skip_all, fields(root = %args.workspace_root.display()))]
pub fn execute(args: ScanArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let options = load_options(global.config.as_ref(), &args.workspace_root)?;

    let scanner = WorkspaceScanner::new(&args.workspace_root);
    let markers = scanner.find_markers()?;
    debug!(count = markers.len(), "markers discovered");

    if markers.is_empty() {
        output.info("no database projects found");
    }

    let inference = TaskInference::new(Box::new(LocalFilesystem::new()));
    let results = inference.scan(&markers, &options, &args.workspace_root)?;

    let json = serde_json::to_string_pretty(&results).map_err(|e| CliError::ConfigError {
        message: "failed to serialize inference results".into(),
        source: Some(Box::new(e)),
    })?;
    println!("{json}");

    let project_count: usize = results.iter().map(|r| r.projects.len()).sum();
    output.success(&format!(
        "inferred tasks for {project_count} project{}",
        if project_count == 1 { "" } else { "s" }
    ));

    Ok(())
}
