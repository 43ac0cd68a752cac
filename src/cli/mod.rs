//! CLI argument parsing for check-allowed-files.
//!
//! Uses clap derive macros. The only input is the list of positional glob
//! patterns; the check itself lives in the `checker` module.

use clap::Parser;

/// Fail unless at least one file matches any of the given glob patterns.
///
/// Patterns are expanded relative to the current directory using shell-style
/// wildcards (`*`, `?`, `[...]`). All matches are printed on success; when
/// nothing matches the process exits with status 1.
#[derive(Parser, Debug)]
#[command(name = "check-allowed-files")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Glob patterns to look for (e.g. `*.md` `docs/*.txt`).
    #[arg(value_name = "PATTERN", trailing_var_arg = true, allow_hyphen_values = true)]
    pub patterns: Vec<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
