//! CLI error types and exit codes

use std::path::PathBuf;

use thiserror::Error;

/// Exit codes for the CLI
/// - 0: Success
/// - 1: General error (local file, input)
/// - 2: Authentication failed
/// - 3: Network error
/// - 4: Validation error
/// - 5: Server error
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Not logged in. Authenticate before calling the API.")]
    NotAuthenticated,

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Connection failed: {0}\n\nTroubleshooting:\n  - Check your internet connection\n  - Verify the API endpoint is correct\n  - Try again in a few moments")]
    ConnectionFailed(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Pagination of {endpoint} did not finish within {limit} pages")]
    PaginationRunaway { endpoint: String, limit: u32 },

    #[error("File missing: {}", .0.display())]
    SheetMissing(PathBuf),

    #[error("Sheet error: {0}")]
    Sheet(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    InputError(String),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotAuthenticated | CliError::AuthenticationFailed(_) => 2,
            CliError::Network(_) | CliError::ConnectionFailed(_) => 3,
            CliError::Validation(_) => 4,
            CliError::Api { status, .. } => {
                if *status >= 500 {
                    5
                } else if *status == 401 || *status == 403 {
                    2
                } else {
                    4
                }
            }
            CliError::PaginationRunaway { .. } => 5,
            CliError::SheetMissing(_)
            | CliError::Sheet(_)
            | CliError::Io(_)
            | CliError::Config(_)
            | CliError::InputError(_) => 1,
        }
    }

    /// Whether this error ends the whole run.
    ///
    /// Authentication and validation problems only end the current
    /// workflow; the operator is returned to the top menu.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            CliError::NotAuthenticated
                | CliError::AuthenticationFailed(_)
                | CliError::Validation(_)
        )
    }

    /// Print the error to stderr with appropriate formatting
    pub fn print(&self) {
        let use_color = std::env::var("NO_COLOR").is_err();

        if use_color {
            eprintln!("\x1b[31mError:\x1b[0m {}", self);
        } else {
            eprintln!("Error: {}", self);
        }

        if let Some(suggestion) = self.suggestion() {
            if use_color {
                eprintln!("\n\x1b[33mSuggestion:\x1b[0m {}", suggestion);
            } else {
                eprintln!("\nSuggestion: {}", suggestion);
            }
        }
    }

    /// Get a suggested action for this error
    fn suggestion(&self) -> Option<&'static str> {
        match self {
            CliError::AuthenticationFailed(_) => {
                Some("Check the email and password for this VIQ and try again.")
            }
            CliError::SheetMissing(_) => Some(
                "Copy the provided sheet template into the current directory, or pass --file.",
            ),
            CliError::ConnectionFailed(_) => Some("Check your network connection and try again."),
            CliError::PaginationRunaway { .. } => {
                Some("The server reported inconsistent page numbers; try again later.")
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CliError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            CliError::ConnectionFailed(e.to_string())
        } else if e.is_timeout() {
            CliError::Network("Request timed out".to_string())
        } else if e.is_decode() {
            CliError::Network(format!("Unexpected response body: {e}"))
        } else {
            CliError::Network(e.to_string())
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Config(format!("JSON error: {}", e))
    }
}

impl From<csv::Error> for CliError {
    fn from(e: csv::Error) -> Self {
        CliError::Sheet(e.to_string())
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(e: dialoguer::Error) -> Self {
        CliError::InputError(format!("Dialog error: {}", e))
    }
}
