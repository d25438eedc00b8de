//! `project_id` rewriting for materialized config files.
//!
//! The marker file is TOML, but the only field inspected is
//! `project_id = "<string>"`, matched with a permissive line scan rather
//! than a full TOML parse. Partially-written config files (e.g. mid-save
//! during a watch cycle) must not fail the rewrite.

use super::layout::BASE_ENV;

/// Strip a trailing `-production` suffix from a logical name.
///
/// `foo-production` → `foo`; names without the suffix pass through
/// unchanged.
pub fn strip_base_suffix(name: &str) -> &str {
    name.strip_suffix(&format!("-{BASE_ENV}"))
        .unwrap_or(name)
}

/// Rewrite the `project_id` value for a target environment.
///
/// Only the first line of the form `project_id = "<value>"` is touched:
/// the base suffix (`-production`) is stripped if present, then the
/// environment name is appended: `foo-production` + `staging` →
/// `foo-staging`. Content without such a line is returned unchanged.
pub fn rewrite(content: &str, env: &str) -> String {
    let mut out = String::with_capacity(content.len() + env.len());
    let mut rewritten = false;

    for line in content.split_inclusive('\n') {
        match parse_line(line) {
            Some(current) if !rewritten => {
                let renamed = format!("{}-{env}", strip_base_suffix(current));
                out.push_str(&line.replacen(
                    &format!("\"{current}\""),
                    &format!("\"{renamed}\""),
                    1,
                ));
                rewritten = true;
            }
            _ => out.push_str(line),
        }
    }
    out
}

/// Parse one line as `project_id = "<value>"`.
fn parse_line(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix("project_id")?;
    let rest = rest.trim_start().strip_prefix('=')?;
    let rest = rest.trim_start().strip_prefix('"')?;
    let end = rest.find('"')?;
    Some(&rest[..end])
}
