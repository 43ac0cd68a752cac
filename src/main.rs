//! check-allowed-files: fail a pipeline step unless expected files exist.
//!
//! Parses the glob patterns from the command line, expands them against the
//! current directory and exits non-zero when nothing matched.

mod checker;
mod cli;
pub mod error;
pub mod exit_codes;
pub mod pattern;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let code = finish(checker::run(&cli.patterns), &mut std::io::stderr());
    ExitCode::from(code as u8)
}

/// Print a failure as `Error: …` and map the outcome to an exit code.
fn finish(result: error::Result<()>, stderr: &mut impl Write) -> i32 {
    match result {
        Ok(()) => exit_codes::SUCCESS,
        Err(err) => {
            let _ = writeln!(stderr, "Error: {}", err);
            err.exit_code()
        }
    }
}
