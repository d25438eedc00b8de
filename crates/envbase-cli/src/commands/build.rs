//! The `build` command - materialize override environments.

use tracing::{debug, instrument};

use envbase_adapters::filesystem::LocalFilesystem;
use envbase_core::application::EnvironmentBuilder;

use crate::{
    cli::{BuildArgs, GlobalArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `build` command.
#[instrument(skip_all, fields(root = %args.project_root.display()))]
pub fn execute(args: BuildArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    debug!("starting environment build");

    let builder = EnvironmentBuilder::new(Box::new(LocalFilesystem::new()));
    let outcome = builder.build(&args.project_root)?;

    if !outcome.success {
        return Err(CliError::BuildFailed {
            path: args.project_root,
        });
    }

    if outcome.environments_built == 0 {
        output.info("no override environments found; nothing to build");
    } else {
        output.success(&format!(
            "built {} environment{} under {}",
            outcome.environments_built,
            if outcome.environments_built == 1 { "" } else { "s" },
            args.project_root.join(".generated").display()
        ));
    }

    Ok(())
}
