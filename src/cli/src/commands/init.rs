//! Init command for the command-line client.

use crate::errors::CliError;
use crate::wallet::Wallet;
use ethers::utils::to_checksum;
use std::path::Path;
use tracing::info;

/// Runs the init command.
pub async fn run<P: AsRef<Path>>(wallet_path: P) -> Result<(), CliError> {
    // Refuse to overwrite an existing wallet
    if wallet_path.as_ref().exists() {
        return Err(CliError::WalletError(
            "Wallet file already exists. Use export to view the key.".to_string(),
        ));
    }

    let wallet = Wallet::new()?;
    wallet.save(&wallet_path)?;
    info!("Wallet saved to {}", wallet_path.as_ref().display());

    println!("Wallet address: {}", to_checksum(&wallet.address()?, None));

    Ok(())
}
