//! Client for the WETH and SpokePool contracts.
//!
//! Submissions return the transaction hash without waiting for the
//! transaction to be mined; confirmation is a separate concern handled by
//! [`wait_for_receipt`].

use crate::bindings::{SpokePoolContract, WethContract};
use crate::errors::BridgeError;
use async_trait::async_trait;
use crossweth_core::errors::CoreError;
use crossweth_core::session::{CallCapability, ReceiptCapability};
use crossweth_core::types::{self, TxId, Wei};
use ethers::{
    core::types::{Address, Bytes, TransactionReceipt, H256, U256},
    middleware::{Middleware, SignerMiddleware},
    providers::{Http, Provider},
    signers::{LocalWallet, Signer},
};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};

/// Contract addresses and the destination chain the client operates
/// against.
#[derive(Debug, Clone)]
pub struct ContractAddresses {
    /// WETH on the origin chain
    pub weth: String,
    /// The SpokePool bridge contract on the origin chain
    pub spoke_pool: String,
    /// WETH on the destination chain
    pub destination_token: String,
    /// Chain id of the destination chain
    pub destination_chain_id: u64,
}

impl Default for ContractAddresses {
    fn default() -> Self {
        Self {
            weth: types::WETH_MAINNET.to_string(),
            spoke_pool: types::SPOKE_POOL_MAINNET.to_string(),
            destination_token: types::WETH_ARBITRUM.to_string(),
            destination_chain_id: types::CHAIN_ID_ARBITRUM,
        }
    }
}

/// Gas ceilings, deadlines, and receipt polling cadence for submitted
/// transactions.
#[derive(Debug, Clone)]
pub struct TxSettings {
    /// Gas-limit ceiling for the WETH deposit and withdraw calls
    pub wrap_gas_limit: u64,
    /// Gas-limit ceiling for the approve call
    pub approve_gas_limit: u64,
    /// Gas-limit ceiling for the bridging deposit call
    pub deposit_gas_limit: u64,
    /// Fill deadline passed to the bridging deposit, relative to block time
    pub fill_deadline_offset_secs: u32,
    /// Interval between receipt polls
    pub receipt_poll_secs: u64,
    /// Time after which an unmined transaction stops being polled
    pub receipt_timeout_secs: u64,
}

impl Default for TxSettings {
    fn default() -> Self {
        Self {
            wrap_gas_limit: 3_000_000,
            approve_gas_limit: 300_000,
            deposit_gas_limit: 3_000_000,
            fill_deadline_offset_secs: 600,
            receipt_poll_secs: 2,
            receipt_timeout_secs: 120,
        }
    }
}

/// A client for wrapping ETH and bridging WETH through the SpokePool.
pub struct BridgeClient<M: Middleware> {
    /// The WETH contract on the origin chain
    weth: WethContract<M>,
    /// The SpokePool bridge contract
    spoke_pool: SpokePoolContract<M>,
    /// The provider for the origin chain
    provider: Arc<M>,
    /// The signing account
    account: Address,
    weth_address: Address,
    spoke_pool_address: Address,
    destination_token: Address,
    destination_chain_id: u64,
    settings: TxSettings,
}

fn parse_address(value: &str, what: &str) -> Result<Address, BridgeError> {
    Address::from_str(value)
        .map_err(|e| BridgeError::InvalidAddress(format!("Invalid {} address: {}", what, e)))
}

/// Parses a 0x-prefixed transaction hash.
pub fn parse_tx_hash(value: &str) -> Result<H256, BridgeError> {
    value
        .trim_start_matches("0x")
        .parse()
        .map_err(|e| BridgeError::InvalidAddress(format!("Invalid transaction hash: {}", e)))
}

impl<S: Signer + 'static> BridgeClient<SignerMiddleware<Provider<Http>, S>> {
    /// Creates a new client over an already-connected signer.
    pub fn new(
        provider: Arc<SignerMiddleware<Provider<Http>, S>>,
        addresses: &ContractAddresses,
        settings: TxSettings,
    ) -> Result<Self, BridgeError> {
        let weth_address = parse_address(&addresses.weth, "WETH contract")?;
        let spoke_pool_address = parse_address(&addresses.spoke_pool, "SpokePool contract")?;
        let destination_token = parse_address(&addresses.destination_token, "destination token")?;
        let account = provider.signer().address();

        let weth = WethContract::new(weth_address, provider.clone());
        let spoke_pool = SpokePoolContract::new(spoke_pool_address, provider.clone());

        Ok(Self {
            weth,
            spoke_pool,
            provider,
            account,
            weth_address,
            spoke_pool_address,
            destination_token,
            destination_chain_id: addresses.destination_chain_id,
            settings,
        })
    }

    /// The signing account address.
    pub fn account(&self) -> Address {
        self.account
    }

    /// Wraps native ETH into WETH by sending `amount_wei` as call value to
    /// the deposit entry point. Returns the transaction hash.
    pub async fn wrap(&self, amount_wei: Wei) -> Result<H256, BridgeError> {
        info!("Wrapping {} wei into WETH", amount_wei);

        let call = self
            .weth
            .deposit()
            .value(U256::from(amount_wei))
            .gas(self.settings.wrap_gas_limit);

        let pending = call
            .send()
            .await
            .map_err(|e| BridgeError::ContractError(format!("Failed to wrap ETH: {}", e)))?;

        Ok(*pending)
    }

    /// Unwraps `amount_wei` WETH back to native ETH.
    pub async fn unwrap_weth(&self, amount_wei: Wei) -> Result<H256, BridgeError> {
        info!("Unwrapping {} wei of WETH", amount_wei);

        let call = self
            .weth
            .withdraw(U256::from(amount_wei))
            .gas(self.settings.wrap_gas_limit);

        let pending = call
            .send()
            .await
            .map_err(|e| BridgeError::ContractError(format!("Failed to unwrap WETH: {}", e)))?;

        Ok(*pending)
    }

    /// Authorizes the SpokePool to transfer up to `amount_wei` WETH.
    pub async fn approve(&self, amount_wei: Wei) -> Result<H256, BridgeError> {
        info!(
            "Approving SpokePool {:?} for {} wei",
            self.spoke_pool_address, amount_wei
        );

        let call = self
            .weth
            .approve(self.spoke_pool_address, U256::from(amount_wei))
            .gas(self.settings.approve_gas_limit);

        let pending = call
            .send()
            .await
            .map_err(|e| BridgeError::ContractError(format!("Failed to approve WETH: {}", e)))?;

        Ok(*pending)
    }

    /// Submits the bridging deposit: sender and recipient are the signing
    /// account, input and output amounts are equal, and no exclusive
    /// relayer is named.
    pub async fn deposit_for_bridging(&self, amount_wei: Wei) -> Result<H256, BridgeError> {
        info!(
            "Bridging {} wei to chain {} for {:?}",
            amount_wei, self.destination_chain_id, self.account
        );

        let amount = U256::from(amount_wei);
        let call = self
            .spoke_pool
            .deposit_v3_now(
                self.account,
                self.account,
                self.weth_address,
                self.destination_token,
                amount,
                amount,
                U256::from(self.destination_chain_id),
                Address::zero(),
                self.settings.fill_deadline_offset_secs,
                0,
                Bytes::default(),
            )
            .gas(self.settings.deposit_gas_limit);

        let pending = call.send().await.map_err(|e| {
            BridgeError::ContractError(format!("Failed to submit bridging deposit: {}", e))
        })?;

        Ok(*pending)
    }

    /// Gets the WETH balance of an account.
    pub async fn weth_balance(&self, owner: Address) -> Result<Wei, BridgeError> {
        let balance = self
            .weth
            .balance_of(owner)
            .call()
            .await
            .map_err(|e| BridgeError::ContractError(format!("Failed to get WETH balance: {}", e)))?;

        Ok(balance.as_u128())
    }

    /// Gets the native ETH balance of an account.
    pub async fn eth_balance(&self, owner: Address) -> Result<Wei, BridgeError> {
        let balance = self
            .provider
            .get_balance(owner, None)
            .await
            .map_err(|e| BridgeError::EthereumError(format!("Failed to get ETH balance: {}", e)))?;

        Ok(balance.as_u128())
    }

    /// Gets the remaining WETH allowance granted to the SpokePool.
    pub async fn spoke_pool_allowance(&self, owner: Address) -> Result<Wei, BridgeError> {
        let allowance = self
            .weth
            .allowance(owner, self.spoke_pool_address)
            .call()
            .await
            .map_err(|e| BridgeError::ContractError(format!("Failed to get allowance: {}", e)))?;

        Ok(allowance.as_u128())
    }

    /// Polls for the receipt of a submitted transaction with the
    /// configured cadence. Returns `None` when the timeout elapses first.
    pub async fn wait_for_receipt(
        &self,
        tx_hash: H256,
    ) -> Result<Option<TransactionReceipt>, BridgeError> {
        wait_for_receipt(
            self.provider.as_ref(),
            tx_hash,
            Duration::from_secs(self.settings.receipt_poll_secs),
            Duration::from_secs(self.settings.receipt_timeout_secs),
        )
        .await
    }
}

/// Polls the chain for a transaction receipt until it appears or `timeout`
/// elapses.
pub async fn wait_for_receipt<M: Middleware>(
    provider: &M,
    tx_hash: H256,
    poll: Duration,
    timeout: Duration,
) -> Result<Option<TransactionReceipt>, BridgeError> {
    let deadline = Instant::now() + timeout;

    loop {
        let receipt = provider
            .get_transaction_receipt(tx_hash)
            .await
            .map_err(|e| BridgeError::TransactionError(format!("Failed to query receipt: {}", e)))?;

        if let Some(receipt) = receipt {
            debug!("Transaction {:?} mined", tx_hash);
            return Ok(Some(receipt));
        }

        if Instant::now() >= deadline {
            return Ok(None);
        }

        tokio::time::sleep(poll).await;
    }
}

/// Creates a new client from an RPC endpoint and a local wallet.
pub fn new_client_with_wallet(
    rpc_url: &str,
    wallet: LocalWallet,
    addresses: &ContractAddresses,
    settings: TxSettings,
) -> Result<BridgeClient<SignerMiddleware<Provider<Http>, LocalWallet>>, BridgeError> {
    let provider = Provider::<Http>::try_from(rpc_url)
        .map_err(|e| BridgeError::EthereumError(format!("Failed to create provider: {}", e)))?;

    let signer = SignerMiddleware::new(provider, wallet);

    BridgeClient::new(Arc::new(signer), addresses, settings)
}

#[async_trait]
impl<S: Signer + 'static> CallCapability for BridgeClient<SignerMiddleware<Provider<Http>, S>> {
    async fn wrap_deposit(&self, amount_wei: Wei) -> Result<TxId, CoreError> {
        self.wrap(amount_wei)
            .await
            .map(|h| format!("{:?}", h))
            .map_err(|e| CoreError::CallFailed(e.to_string()))
    }

    async fn withdraw(&self, amount_wei: Wei) -> Result<TxId, CoreError> {
        self.unwrap_weth(amount_wei)
            .await
            .map(|h| format!("{:?}", h))
            .map_err(|e| CoreError::CallFailed(e.to_string()))
    }

    async fn approve_bridge(&self, amount_wei: Wei) -> Result<TxId, CoreError> {
        self.approve(amount_wei)
            .await
            .map(|h| format!("{:?}", h))
            .map_err(|e| CoreError::CallFailed(e.to_string()))
    }

    async fn bridge_deposit(&self, amount_wei: Wei) -> Result<TxId, CoreError> {
        self.deposit_for_bridging(amount_wei)
            .await
            .map(|h| format!("{:?}", h))
            .map_err(|e| CoreError::CallFailed(e.to_string()))
    }
}

#[async_trait]
impl<S: Signer + 'static> ReceiptCapability for BridgeClient<SignerMiddleware<Provider<Http>, S>> {
    async fn wait_confirmed(&self, tx: &TxId) -> Result<bool, CoreError> {
        let tx_hash = parse_tx_hash(tx).map_err(|e| CoreError::CallFailed(e.to_string()))?;

        let receipt = self
            .wait_for_receipt(tx_hash)
            .await
            .map_err(|e| CoreError::CallFailed(e.to_string()))?;

        Ok(receipt.is_some())
    }
}
