//! Core primitives for the crossweth bridging client.
//!
//! This crate provides the shared types and session state for wrapping ETH
//! into WETH and bridging it across chains: amount validation and unit
//! conversion, the fee quote model, and the capability traits the concrete
//! contract and HTTP layers implement.

pub mod amount;
pub mod errors;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use errors::CoreError;
pub use session::{CallCapability, QuoteCapability, ReceiptCapability, Session};
pub use types::{FeeQuote, TxId, Wei};
