//! Export command for the command-line client.

use crate::errors::CliError;
use crate::wallet::Wallet;
use std::path::Path;

/// Runs the export command.
pub async fn run<P: AsRef<Path>>(wallet_path: P) -> Result<String, CliError> {
    let wallet = Wallet::load(wallet_path)?;
    Ok(wallet.private_key().to_string())
}
