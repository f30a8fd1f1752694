//! Error types for the welcomegen CLI.
//!
//! Uses thiserror for derive macros. A release version that is missing from
//! the document is not an error and has no variant here.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for welcomegen operations.
#[derive(Error, Debug)]
pub enum WelcomeError {
    /// Invalid configuration or arguments.
    #[error("{0}")]
    UserError(String),

    /// The metadata document is not well-formed.
    #[error("failed to parse '{path}' at byte {position}: {message}")]
    ParseError {
        path: String,
        position: u64,
        message: String,
    },

    /// The metadata document could not be read.
    #[error("failed to read '{path}': {message}")]
    IoError { path: String, message: String },

    /// One or more demo scripts are malformed.
    #[error("Demo validation failed: {0}")]
    DemoError(String),
}

impl WelcomeError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            WelcomeError::UserError(_) => exit_codes::USER_ERROR,
            WelcomeError::ParseError { .. } => exit_codes::PARSE_FAILURE,
            WelcomeError::IoError { .. } => exit_codes::IO_FAILURE,
            WelcomeError::DemoError(_) => exit_codes::DEMO_FAILURE,
        }
    }
}

/// Result type alias for welcomegen operations.
pub type Result<T> = std::result::Result<T, WelcomeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = WelcomeError::UserError("bad config".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn parse_error_has_correct_exit_code() {
        let err = WelcomeError::ParseError {
            path: "appdata.xml".to_string(),
            position: 12,
            message: "unexpected end".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::PARSE_FAILURE);
    }

    #[test]
    fn io_error_has_correct_exit_code() {
        let err = WelcomeError::IoError {
            path: "missing.xml".to_string(),
            message: "not found".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
    }

    #[test]
    fn demo_error_has_correct_exit_code() {
        let err = WelcomeError::DemoError("empty step".to_string());
        assert_eq!(err.exit_code(), exit_codes::DEMO_FAILURE);
    }

    #[test]
    fn parse_error_message_names_path_and_position() {
        let err = WelcomeError::ParseError {
            path: "desktop/app.xml".to_string(),
            position: 42,
            message: "unclosed element <p>".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse 'desktop/app.xml' at byte 42: unclosed element <p>"
        );
    }

    #[test]
    fn demo_error_message_format() {
        let err = WelcomeError::DemoError("item 2: empty step".to_string());
        assert_eq!(err.to_string(), "Demo validation failed: item 2: empty step");
    }
}
