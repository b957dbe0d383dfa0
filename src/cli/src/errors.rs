//! Error types for the command-line client.

use crossweth_core::CoreError;
use std::error::Error as StdError;
use std::fmt;

/// Errors that can occur in the command-line client.
#[derive(Debug)]
pub enum CliError {
    /// Error when a file operation fails.
    FileError(std::io::Error),

    /// Error when JSON serialization or deserialization fails.
    JsonError(serde_json::Error),

    /// Error when a wallet operation fails.
    WalletError(String),

    /// Error when the chain client cannot be constructed.
    ClientError(String),

    /// Error when a session action fails.
    ActionFailed(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileError(e) => write!(f, "File error: {}", e),
            CliError::JsonError(e) => write!(f, "JSON error: {}", e),
            CliError::WalletError(msg) => write!(f, "Wallet error: {}", msg),
            CliError::ClientError(msg) => write!(f, "Client error: {}", msg),
            CliError::ActionFailed(msg) => write!(f, "{}", msg),
        }
    }
}

impl StdError for CliError {}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::FileError(error)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        CliError::JsonError(error)
    }
}

impl From<CoreError> for CliError {
    fn from(error: CoreError) -> Self {
        CliError::ActionFailed(error.to_string())
    }
}
