//! Configuration for the command-line client.
//!
//! Contract addresses, chain ids, and transaction settings live here rather
//! than as in-code constants, so a different network pair only needs a
//! different config file.

use crossweth_bridge::{ContractAddresses, TxSettings};
use crossweth_core::types;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for the command-line client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// The RPC endpoint of the origin chain
    pub rpc_url: String,
    /// WETH on the origin chain
    pub weth_address: String,
    /// WETH on the destination chain
    pub destination_weth_address: String,
    /// The SpokePool bridge contract on the origin chain
    pub spoke_pool_address: String,
    /// Chain id of the origin chain
    pub origin_chain_id: u64,
    /// Chain id of the destination chain
    pub destination_chain_id: u64,
    /// The fee quoting endpoint
    pub fee_api_url: String,
    /// Gas-limit ceiling for wrap and unwrap transactions
    pub wrap_gas_limit: u64,
    /// Gas-limit ceiling for the approve transaction
    pub approve_gas_limit: u64,
    /// Gas-limit ceiling for the bridging deposit transaction
    pub deposit_gas_limit: u64,
    /// Fill deadline passed to the bridging deposit, in seconds
    pub fill_deadline_offset_secs: u32,
    /// Interval between receipt polls, in seconds
    pub approval_poll_secs: u64,
    /// Time after which waiting for a receipt gives up, in seconds
    pub approval_timeout_secs: u64,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            weth_address: types::WETH_MAINNET.to_string(),
            destination_weth_address: types::WETH_ARBITRUM.to_string(),
            spoke_pool_address: types::SPOKE_POOL_MAINNET.to_string(),
            origin_chain_id: types::CHAIN_ID_MAINNET,
            destination_chain_id: types::CHAIN_ID_ARBITRUM,
            fee_api_url: types::SUGGESTED_FEES_URL.to_string(),
            wrap_gas_limit: 3_000_000,
            approve_gas_limit: 300_000,
            deposit_gas_limit: 3_000_000,
            fill_deadline_offset_secs: 600,
            approval_poll_secs: 2,
            approval_timeout_secs: 120,
        }
    }
}

impl BridgeConfig {
    /// Loads configuration from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Saves configuration to a file.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// The contract addresses the chain client operates against.
    pub fn contract_addresses(&self) -> ContractAddresses {
        ContractAddresses {
            weth: self.weth_address.clone(),
            spoke_pool: self.spoke_pool_address.clone(),
            destination_token: self.destination_weth_address.clone(),
            destination_chain_id: self.destination_chain_id,
        }
    }

    /// The transaction settings the chain client submits with.
    pub fn tx_settings(&self) -> TxSettings {
        TxSettings {
            wrap_gas_limit: self.wrap_gas_limit,
            approve_gas_limit: self.approve_gas_limit,
            deposit_gas_limit: self.deposit_gas_limit,
            fill_deadline_offset_secs: self.fill_deadline_offset_secs,
            receipt_poll_secs: self.approval_poll_secs,
            receipt_timeout_secs: self.approval_timeout_secs,
        }
    }
}
