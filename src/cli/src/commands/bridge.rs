//! Bridge command for the command-line client.

use crate::commands::{chain_client, load_wallet};
use crate::config::BridgeConfig;
use crate::errors::CliError;
use colored::Colorize;
use crossweth_bridge::parse_tx_hash;
use crossweth_core::{Session, TxId};
use std::path::Path;
use tracing::info;

/// Runs the bridge command: approve, wait for the approval to be mined,
/// then submit the bridging deposit.
pub async fn run<P: AsRef<Path>>(
    config: &BridgeConfig,
    wallet_path: P,
    amount: &str,
) -> Result<TxId, CliError> {
    let wallet = load_wallet(wallet_path)?;
    let client = chain_client(config, &wallet)?;
    let account = format!("{:?}", client.account());
    info!(
        "Bridging {} WETH from {} to chain {}",
        amount, account, config.destination_chain_id
    );

    let mut session = Session::new(Some(account));
    session.set_amount(amount);

    let tx = session.bridge(&client, &client).await?;
    println!("Bridging deposit sent: {}", tx);

    let hash = parse_tx_hash(&tx).map_err(|e| CliError::ActionFailed(e.to_string()))?;
    match client.wait_for_receipt(hash).await {
        Ok(Some(_)) => println!("{}", "Bridging deposit confirmed".green()),
        Ok(None) => println!(
            "{}",
            "Deposit not yet mined; check later with `crossweth status`".yellow()
        ),
        Err(e) => println!("{} {}", "Receipt watch failed:".yellow(), e),
    }

    Ok(tx)
}
