//! Error types for the fee quoting client.

use thiserror::Error;

/// Errors that can occur while fetching a fee quote.
#[derive(Debug, Error)]
pub enum FeeError {
    /// The request could not be sent or the response could not be read.
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status.
    #[error("Fee API returned status {0}")]
    Status(u16),

    /// The endpoint answered with an empty body.
    #[error("No fee data received")]
    EmptyResponse,

    /// The response body could not be parsed as a fee breakdown.
    #[error("Invalid fee response: {0}")]
    InvalidResponse(String),
}
