/// Error types for the core crate.
use std::error::Error as StdError;
use std::fmt;

/// Errors that can occur in the session core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Error when the entered amount is empty, non-numeric, or not positive.
    InvalidAmount(String),

    /// Error when no wallet account is available.
    NotConnected(String),

    /// Error when an action is re-invoked while it is already in flight.
    Busy(String),

    /// Error when a contract call fails.
    CallFailed(String),

    /// Error when a fee quote request fails.
    QuoteFailed(String),

    /// Error when a transaction is not confirmed within the allotted time.
    ConfirmationTimeout(String),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidAmount(msg) => write!(f, "Invalid amount: {}", msg),
            CoreError::NotConnected(msg) => write!(f, "Not connected: {}", msg),
            CoreError::Busy(msg) => write!(f, "Busy: {}", msg),
            CoreError::CallFailed(msg) => write!(f, "{}", msg),
            CoreError::QuoteFailed(msg) => write!(f, "{}", msg),
            CoreError::ConfirmationTimeout(msg) => write!(f, "Confirmation timeout: {}", msg),
        }
    }
}

impl StdError for CoreError {}
