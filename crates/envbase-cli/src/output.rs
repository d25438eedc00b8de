//! Output management and formatting.
//!
//! Status lines go to stderr so that structured command output (the JSON
//! from `scan`) can be piped cleanly from stdout.

use owo_colors::OwoColorize;

use crate::cli::GlobalArgs;

/// Manages CLI output based on parsed flags.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags.
    pub fn new(args: &GlobalArgs) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color,
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) {
        if self.quiet {
            return;
        }
        eprintln!("{msg}");
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) {
        if self.quiet {
            return;
        }
        if self.no_color {
            eprintln!("\u{2713} {msg}"); // ✓
        } else {
            eprintln!("{} {}", "\u{2713}".green().bold(), msg.green());
        }
    }

    /// Error indicator: `✗ <msg>`.  *Not* suppressed in quiet mode — errors
    /// must always be visible.
    pub fn error(&self, msg: &str) {
        if self.no_color {
            eprintln!("\u{2717} {msg}"); // ✗
        } else {
            eprintln!("{} {}", "\u{2717}".red().bold(), msg.red());
        }
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) {
        if self.quiet {
            return;
        }
        if self.no_color {
            eprintln!("\u{26a0} {msg}"); // ⚠
        } else {
            eprintln!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow());
        }
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) {
        if self.quiet {
            return;
        }
        if self.no_color {
            eprintln!("\u{2139} {msg}"); // ℹ
        } else {
            eprintln!("{} {}", "\u{2139}".blue().bold(), msg.blue());
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_manager(quiet: bool, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
        };
        OutputManager::new(&args)
    }

    #[test]
    fn quiet_flag_reported() {
        assert!(make_manager(true, true).is_quiet());
        assert!(!make_manager(false, true).is_quiet());
    }

    #[test]
    fn no_color_flag_reported() {
        assert!(make_manager(false, false).supports_color());
        assert!(!make_manager(false, true).supports_color());
    }
}
