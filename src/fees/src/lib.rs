//! Fee quoting client for the crossweth bridging client.
//!
//! Talks to the Across `suggested-fees` HTTP endpoint and parses the
//! returned fee breakdown into [`crossweth_core::FeeQuote`].

pub mod client;
pub mod errors;

pub use client::FeeClient;
pub use errors::FeeError;
