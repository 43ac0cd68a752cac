//! Exit code constants for check-allowed-files.
//!
//! - 0: At least one path matched
//! - 1: No path matched any pattern (including no patterns at all)
//!
//! Argument parsing failures are reported by clap with its own usage code (2).

/// At least one allowed file was found.
pub const SUCCESS: i32 = 0;

/// No allowed files were found.
pub const NO_MATCHES: i32 = 1;
