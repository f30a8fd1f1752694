//! Exit code constants for the welcomegen CLI.
//!
//! - 0: Success (a version with no matching release is still a success)
//! - 1: User error (bad config, unreadable config file)
//! - 2: Usage error, reported by clap before any of our code runs
//! - 3: Malformed metadata document
//! - 4: I/O failure reading the metadata document
//! - 5: Demo script validation failure (`demo_policy: fail`)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: invalid configuration or arguments clap cannot catch.
pub const USER_ERROR: i32 = 1;

/// Usage error. Never returned by us; clap exits with it directly.
pub const USAGE_ERROR: i32 = 2;

/// The metadata document is not well-formed XML.
pub const PARSE_FAILURE: i32 = 3;

/// The metadata document could not be read.
pub const IO_FAILURE: i32 = 4;

/// A demo script failed validation under the `fail` policy.
pub const DEMO_FAILURE: i32 = 5;
