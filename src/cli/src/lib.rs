//! Command-line client for wrapping ETH and bridging WETH over Across.

pub mod commands;
pub mod config;
pub mod errors;
pub mod wallet;

// Re-export commonly used types and functions
pub use config::BridgeConfig;
pub use errors::CliError;
pub use wallet::Wallet;
