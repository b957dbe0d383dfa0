//! Status command for the command-line client.

use crate::config::BridgeConfig;
use crate::errors::CliError;
use crossweth_bridge::{parse_tx_hash, wait_for_receipt};
use ethers::providers::{Http, Provider};
use std::time::Duration;
use tracing::info;

/// Runs the status command. Returns whether the transaction was mined
/// before the configured timeout.
pub async fn run(config: &BridgeConfig, tx: &str) -> Result<bool, CliError> {
    let hash = parse_tx_hash(tx).map_err(|e| CliError::ActionFailed(e.to_string()))?;

    let provider = Provider::<Http>::try_from(config.rpc_url.as_str())
        .map_err(|e| CliError::ClientError(format!("Failed to create provider: {}", e)))?;

    info!("Watching transaction {} on {}", tx, config.rpc_url);
    let receipt = wait_for_receipt(
        &provider,
        hash,
        Duration::from_secs(config.approval_poll_secs),
        Duration::from_secs(config.approval_timeout_secs),
    )
    .await
    .map_err(|e| CliError::ActionFailed(e.to_string()))?;

    match receipt {
        Some(receipt) => {
            if let Some(block) = receipt.block_number {
                println!("Mined in block {}", block);
            }
            Ok(true)
        }
        None => Ok(false),
    }
}
