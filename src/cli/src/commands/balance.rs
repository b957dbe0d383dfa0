//! Balance command for the command-line client.

use crate::commands::{chain_client, load_wallet};
use crate::config::BridgeConfig;
use crate::errors::CliError;
use crossweth_core::types::format_eth;
use ethers::utils::to_checksum;
use std::path::Path;
use tracing::debug;

/// Runs the balance command.
pub async fn run<P: AsRef<Path>>(config: &BridgeConfig, wallet_path: P) -> Result<(), CliError> {
    let wallet = load_wallet(wallet_path)?;
    let client = chain_client(config, &wallet)?;
    let account = client.account();

    println!("Wallet address: {}", to_checksum(&account, None));

    let eth = client
        .eth_balance(account)
        .await
        .map_err(|e| CliError::ActionFailed(e.to_string()))?;
    debug!("ETH balance: {} wei", eth);

    let weth = client
        .weth_balance(account)
        .await
        .map_err(|e| CliError::ActionFailed(e.to_string()))?;
    debug!("WETH balance: {} wei", weth);

    println!("ETH balance:  {}", format_eth(eth));
    println!("WETH balance: {}", format_eth(weth));

    Ok(())
}
