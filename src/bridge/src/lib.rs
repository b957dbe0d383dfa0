//! Contract layer for the crossweth bridging client.
//!
//! This crate wraps the WETH and Across SpokePool contracts behind a single
//! [`client::BridgeClient`] that submits transactions and polls for their
//! receipts.

pub mod bindings;
pub mod client;
pub mod errors;

pub use client::{
    new_client_with_wallet, parse_tx_hash, wait_for_receipt, BridgeClient, ContractAddresses,
    TxSettings,
};
pub use errors::BridgeError;
