//! Wallet implementation for the command-line client.
//!
//! The wallet file holds a hex-encoded secp256k1 private key; the signer is
//! derived from it on demand. A missing wallet file is the disconnected
//! state.

use crate::errors::CliError;
use ethers::core::types::Address;
use ethers::signers::{LocalWallet, Signer};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

/// A signing wallet for the command-line client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    /// The hex-encoded private key
    private_key: String,
}

impl Wallet {
    /// Creates a new wallet with a random private key.
    pub fn new() -> Result<Self, CliError> {
        let signer = LocalWallet::new(&mut rand::thread_rng());
        let private_key = hex::encode(signer.signer().to_bytes());

        Ok(Self { private_key })
    }

    /// Loads a wallet from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let wallet = serde_json::from_str(&contents)?;
        Ok(wallet)
    }

    /// Saves a wallet to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), CliError> {
        let contents = serde_json::to_string_pretty(self)?;

        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = File::create(path)?;
        file.write_all(contents.as_bytes())?;

        Ok(())
    }

    /// The hex-encoded private key.
    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    /// Derives a signer bound to the given chain id.
    pub fn signer(&self, chain_id: u64) -> Result<LocalWallet, CliError> {
        let signer = self
            .private_key
            .parse::<LocalWallet>()
            .map_err(|e| CliError::WalletError(format!("Invalid private key: {}", e)))?;

        Ok(signer.with_chain_id(chain_id))
    }

    /// The account address.
    pub fn address(&self) -> Result<Address, CliError> {
        let signer = self
            .private_key
            .parse::<LocalWallet>()
            .map_err(|e| CliError::WalletError(format!("Invalid private key: {}", e)))?;

        Ok(signer.address())
    }
}
