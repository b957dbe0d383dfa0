//! Commands for the command-line client.

pub mod balance;
pub mod bridge;
pub mod export;
pub mod fees;
pub mod init;
pub mod status;
pub mod unwrap;
pub mod wrap;

use crate::config::BridgeConfig;
use crate::errors::CliError;
use crate::wallet::Wallet;
use crossweth_bridge::{new_client_with_wallet, BridgeClient};
use crossweth_fees::FeeClient;
use ethers::middleware::SignerMiddleware;
use ethers::providers::{Http, Provider};
use ethers::signers::LocalWallet;
use std::path::Path;

/// The concrete middleware stack the commands run against.
pub type SignerClient = SignerMiddleware<Provider<Http>, LocalWallet>;

/// Loads the wallet file; a missing file is the disconnected state.
pub(crate) fn load_wallet<P: AsRef<Path>>(path: P) -> Result<Wallet, CliError> {
    Wallet::load(&path).map_err(|e| {
        CliError::WalletError(format!(
            "Failed to load wallet (run `crossweth init` first): {}",
            e
        ))
    })
}

/// Builds the chain client for the configured network and wallet.
pub(crate) fn chain_client(
    config: &BridgeConfig,
    wallet: &Wallet,
) -> Result<BridgeClient<SignerClient>, CliError> {
    let signer = wallet.signer(config.origin_chain_id)?;

    new_client_with_wallet(
        &config.rpc_url,
        signer,
        &config.contract_addresses(),
        config.tx_settings(),
    )
    .map_err(|e| CliError::ClientError(e.to_string()))
}

/// Builds the fee client for the configured token/chain pair.
pub(crate) fn fee_client(config: &BridgeConfig) -> FeeClient {
    FeeClient::new(
        &config.fee_api_url,
        &config.weth_address,
        &config.destination_weth_address,
        config.origin_chain_id,
        config.destination_chain_id,
    )
}
