/// Error types for the contract layer.
use std::error::Error as StdError;
use std::fmt;

/// Errors that can occur in the contract layer.
#[derive(Debug)]
pub enum BridgeError {
    /// Error when an Ethereum provider operation fails.
    EthereumError(String),

    /// Error when a contract call fails.
    ContractError(String),

    /// Error when a transaction or receipt operation fails.
    TransactionError(String),

    /// Error when an address is invalid.
    InvalidAddress(String),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::EthereumError(msg) => write!(f, "Ethereum error: {}", msg),
            BridgeError::ContractError(msg) => write!(f, "Contract error: {}", msg),
            BridgeError::TransactionError(msg) => write!(f, "Transaction error: {}", msg),
            BridgeError::InvalidAddress(msg) => write!(f, "Invalid address: {}", msg),
        }
    }
}

impl StdError for BridgeError {}
