//! Filesystem expansion of shell-style glob patterns.
//!
//! Expansion is relative to the current directory and follows shell rules:
//! wildcards never cross a `/`, a leading `.` must be matched literally and
//! matching is case-sensitive. A `**` component descends recursively.
//!
//! Entries that cannot be read (for example a directory without read
//! permission) are dropped from the result.

use glob::MatchOptions;
use thiserror::Error;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// A pattern that could not be parsed.
///
/// Such a pattern matches nothing; callers report it and carry on.
#[derive(Error, Debug)]
#[error("skipping pattern '{pattern}': {reason}")]
pub struct PatternError {
    pub pattern: String,
    pub reason: String,
}

/// Expand a single pattern against the filesystem.
///
/// Paths are relative to the current directory, or absolute for an absolute
/// pattern.
pub fn expand(pattern: &str) -> Result<Vec<String>, PatternError> {
    let entries = glob::glob_with(pattern, MATCH_OPTIONS).map_err(|e| PatternError {
        pattern: pattern.to_string(),
        reason: e.msg.to_string(),
    })?;

    Ok(entries
        .filter_map(|entry| entry.ok())
        .map(|path| path.to_string_lossy().into_owned())
        .collect())
}
