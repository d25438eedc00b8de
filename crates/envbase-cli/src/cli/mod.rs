//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names,
//! aliases, help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "envbase",
    bin_name = "envbase",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Multi-environment database project tooling",
    long_about = "envbase materializes per-environment database configurations \
                  (base + overrides) and infers runnable tasks for every \
                  database project discovered in a workspace.",
    after_help = "EXAMPLES:\n\
        \x20 envbase build apps/my-db\n\
        \x20 envbase scan\n\
        \x20 envbase scan --workspace-root ../monorepo -c envbase.toml",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the generated environment trees for one project.
    #[command(
        visible_alias = "b",
        about = "Materialize override environments under .generated/",
        after_help = "EXAMPLES:\n\
            \x20 envbase build apps/my-db\n\
            \x20 envbase build . -v"
    )]
    Build(BuildArgs),

    /// Scan the workspace and print inferred task definitions.
    #[command(
        about = "Discover database projects and print their task graph as JSON",
        after_help = "EXAMPLES:\n\
            \x20 envbase scan\n\
            \x20 envbase scan --workspace-root ../monorepo"
    )]
    Scan(ScanArgs),
}

// ── build ─────────────────────────────────────────────────────────────────────

/// Arguments for `envbase build`.
#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Project root directory (the one containing `production/`).
    #[arg(value_name = "PROJECT_ROOT", help = "Project root directory")]
    pub project_root: PathBuf,
}

// ── scan ──────────────────────────────────────────────────────────────────────

/// Arguments for `envbase scan`.
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Workspace root to scan for `production/config.toml` markers.
    #[arg(
        long = "workspace-root",
        value_name = "DIR",
        default_value = ".",
        help = "Workspace root directory"
    )]
    pub workspace_root: PathBuf,
}

// ── tests ─────────────────────────────────────────────────────────────────────
