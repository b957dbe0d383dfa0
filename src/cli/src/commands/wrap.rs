//! Wrap command for the command-line client.

use crate::commands::{chain_client, load_wallet};
use crate::config::BridgeConfig;
use crate::errors::CliError;
use colored::Colorize;
use crossweth_bridge::parse_tx_hash;
use crossweth_core::{Session, TxId};
use std::path::Path;
use tracing::info;

/// Runs the wrap command.
pub async fn run<P: AsRef<Path>>(
    config: &BridgeConfig,
    wallet_path: P,
    amount: &str,
) -> Result<TxId, CliError> {
    let wallet = load_wallet(wallet_path)?;
    let client = chain_client(config, &wallet)?;
    let account = format!("{:?}", client.account());
    info!("Wrapping {} ETH from {}", amount, account);

    let mut session = Session::new(Some(account));
    session.set_amount(amount);

    let tx = session.wrap(&client).await?;
    println!("Transaction sent: {}", tx);

    // Watch for the receipt and report the confirmation banner.
    let hash = parse_tx_hash(&tx).map_err(|e| CliError::ActionFailed(e.to_string()))?;
    match client.wait_for_receipt(hash).await {
        Ok(Some(_)) => println!("{}", "Transaction confirmed".green()),
        Ok(None) => println!(
            "{}",
            "Transaction not yet mined; check later with `crossweth status`".yellow()
        ),
        Err(e) => println!("{} {}", "Receipt watch failed:".yellow(), e),
    }

    Ok(tx)
}
