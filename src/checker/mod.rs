//! The allowed-files check.
//!
//! Every pattern is expanded in the order given and the results are
//! concatenated into one [`MatchSet`]. The check passes if and only if that
//! set is non-empty. Matches are not deduplicated across patterns, and a
//! pattern that matches nothing (or cannot be parsed) does not fail the check
//! on its own.

use crate::error::{CheckError, Result};
use crate::pattern::{self, PatternError};
use std::fmt;

/// All paths matched by one invocation, in pattern order.
#[derive(Debug, Default)]
pub struct MatchSet {
    /// Matched paths; may contain duplicates.
    pub paths: Vec<String>,
    /// Patterns that were skipped because they could not be parsed.
    pub skipped: Vec<PatternError>,
}

impl MatchSet {
    /// Expand every pattern against the current directory.
    pub fn collect<S: AsRef<str>>(patterns: &[S]) -> Self {
        let mut set = Self::default();

        for raw in patterns {
            match pattern::expand(raw.as_ref()) {
                Ok(paths) => set.paths.extend(paths),
                Err(e) => set.skipped.push(e),
            }
        }

        set
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Turn the set into the success report, or fail when nothing matched.
    pub fn into_report(self) -> Result<Report> {
        if self.is_empty() {
            return Err(CheckError::NoMatches);
        }
        Ok(Report { paths: self.paths })
    }
}

/// Successful check outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub paths: Vec<String>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted: Vec<String> = self.paths.iter().map(|p| format!("'{}'", p)).collect();
        write!(f, "Allowed files found: [{}]", quoted.join(", "))
    }
}

/// Run the check for the given patterns and print the outcome.
///
/// Skipped patterns are reported as warnings on stderr. The success report
/// goes to stdout; the failure is returned for `main` to print and map to
/// an exit code.
pub fn run(patterns: &[String]) -> Result<()> {
    let set = MatchSet::collect(patterns);

    for skipped in &set.skipped {
        eprintln!("Warning: {}", skipped);
    }

    let report = set.into_report()?;
    println!("{}", report);

    Ok(())
}
