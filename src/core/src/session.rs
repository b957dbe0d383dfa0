//! Session state and action handlers.
//!
//! A [`Session`] holds the transient state of one bridging session: the
//! entered amount, the last transaction handle, the last fee quote, the
//! in-flight flags, and the last error message. The action handlers drive
//! the external collaborators through the capability traits below; the
//! contract and HTTP layers provide the real implementations.
//!
//! At most one transaction handle and one fee quote are live at a time:
//! starting a new action discards the previous result. A handler whose flag
//! is already set refuses to start, so the same action can never run twice
//! concurrently.

use crate::amount;
use crate::errors::CoreError;
use crate::types::{FeeQuote, TxId, Wei};
use async_trait::async_trait;
use tracing::{debug, info};

/// Contract-call capability: submits a transaction and returns its handle
/// without waiting for it to be mined.
#[async_trait]
pub trait CallCapability: Send + Sync {
    /// Wraps native ETH by calling the WETH deposit entry point.
    async fn wrap_deposit(&self, amount_wei: Wei) -> Result<TxId, CoreError>;

    /// Unwraps WETH back to native ETH.
    async fn withdraw(&self, amount_wei: Wei) -> Result<TxId, CoreError>;

    /// Authorizes the bridge contract to transfer up to `amount_wei` WETH.
    async fn approve_bridge(&self, amount_wei: Wei) -> Result<TxId, CoreError>;

    /// Submits the bridging deposit to the bridge contract.
    async fn bridge_deposit(&self, amount_wei: Wei) -> Result<TxId, CoreError>;
}

/// Fee-quoting capability: one request per invocation, no caching.
#[async_trait]
pub trait QuoteCapability: Send + Sync {
    /// Fetches the suggested fee breakdown for the given base-unit amount.
    async fn suggested_fees(&self, amount_units: Wei) -> Result<FeeQuote, CoreError>;
}

/// Receipt-watching capability over submitted transactions.
#[async_trait]
pub trait ReceiptCapability: Send + Sync {
    /// Waits until the transaction is mined or a deadline elapses.
    ///
    /// Returns `Ok(false)` when the deadline elapsed without a receipt.
    async fn wait_confirmed(&self, tx: &TxId) -> Result<bool, CoreError>;
}

/// Transient state of one bridging session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// The connected account address, if any
    pub account: Option<String>,
    /// The raw amount string the user entered
    pub eth_amount: String,
    /// Handle of the last submitted transaction
    pub tx_hash: Option<TxId>,
    /// The last fetched fee breakdown
    pub fee_quote: Option<FeeQuote>,
    /// True while a transaction action is in flight
    pub loading: bool,
    /// True while a fee quote request is in flight
    pub fetching_fees: bool,
    /// Last human-readable failure
    pub error: Option<String>,
}

impl Session {
    /// Creates a session for the given account.
    pub fn new(account: Option<String>) -> Self {
        Self {
            account,
            ..Default::default()
        }
    }

    /// Sets the entered amount. Validation happens on each action.
    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.eth_amount = amount.into();
    }

    fn require_account(&self) -> Result<&str, CoreError> {
        self.account.as_deref().ok_or_else(|| {
            CoreError::NotConnected("Please connect your wallet first".to_string())
        })
    }

    /// Wraps the entered amount of ETH into WETH.
    ///
    /// On success the returned transaction handle replaces any previous one.
    /// On failure the error slot is set and prior state is left unchanged.
    pub async fn wrap<C: CallCapability>(&mut self, calls: &C) -> Result<TxId, CoreError> {
        if self.loading {
            return Err(CoreError::Busy("a transaction is already in flight".to_string()));
        }
        self.require_account()?;
        let amount_wei = amount::to_wei(&self.eth_amount)?;

        self.error = None;
        self.loading = true;
        info!("Wrapping {} ETH ({} wei)", self.eth_amount, amount_wei);

        let result = calls.wrap_deposit(amount_wei).await;
        self.loading = false;

        match result {
            Ok(tx) => {
                self.tx_hash = Some(tx.clone());
                Ok(tx)
            }
            Err(e) => {
                self.error = Some(format!("Error: {}", e));
                Err(e)
            }
        }
    }

    /// Unwraps the entered amount of WETH back to native ETH.
    pub async fn unwrap<C: CallCapability>(&mut self, calls: &C) -> Result<TxId, CoreError> {
        if self.loading {
            return Err(CoreError::Busy("a transaction is already in flight".to_string()));
        }
        self.require_account()?;
        let amount_wei = amount::to_wei(&self.eth_amount)?;

        self.error = None;
        self.loading = true;
        info!("Unwrapping {} WETH ({} wei)", self.eth_amount, amount_wei);

        let result = calls.withdraw(amount_wei).await;
        self.loading = false;

        match result {
            Ok(tx) => {
                self.tx_hash = Some(tx.clone());
                Ok(tx)
            }
            Err(e) => {
                self.error = Some(format!("Error: {}", e));
                Err(e)
            }
        }
    }

    /// Fetches the suggested fee breakdown for the entered amount.
    ///
    /// The previous quote and error are discarded before the request is
    /// issued; on failure the quote stays empty and the raw error message
    /// fills the error slot.
    pub async fn fetch_fees<Q: QuoteCapability>(
        &mut self,
        quotes: &Q,
    ) -> Result<FeeQuote, CoreError> {
        if self.fetching_fees {
            return Err(CoreError::Busy("a quote request is already in flight".to_string()));
        }
        let amount_units = amount::to_quote_units(&self.eth_amount)?;

        self.error = None;
        self.fee_quote = None;
        self.fetching_fees = true;
        debug!("Requesting suggested fees for {} base units", amount_units);

        let result = quotes.suggested_fees(amount_units).await;
        self.fetching_fees = false;

        match result {
            Ok(quote) => {
                self.fee_quote = Some(quote.clone());
                Ok(quote)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Bridges the entered amount: approves the bridge contract, waits for
    /// the approval to be mined, then submits the bridging deposit.
    ///
    /// A failure at any step aborts the remaining steps; a completed
    /// approval is not undone. The deposit handle overwrites any prior
    /// transaction handle.
    pub async fn bridge<C: CallCapability, R: ReceiptCapability>(
        &mut self,
        calls: &C,
        receipts: &R,
    ) -> Result<TxId, CoreError> {
        if self.loading {
            return Err(CoreError::Busy("a transaction is already in flight".to_string()));
        }
        self.require_account()?;
        let amount_wei = amount::to_wei(&self.eth_amount)?;

        self.error = None;
        self.loading = true;
        info!("Approving bridge for {} wei", amount_wei);

        let approve_tx = match calls.approve_bridge(amount_wei).await {
            Ok(tx) => tx,
            Err(e) => {
                self.loading = false;
                self.error = Some(format!("Error: {}", e));
                return Err(e);
            }
        };
        debug!("Approval transaction sent: {}", approve_tx);

        match receipts.wait_confirmed(&approve_tx).await {
            Ok(true) => {}
            Ok(false) => {
                self.loading = false;
                let e = CoreError::ConfirmationTimeout(format!(
                    "approval {} not mined in time",
                    approve_tx
                ));
                self.error = Some(format!("Error: {}", e));
                return Err(e);
            }
            Err(e) => {
                self.loading = false;
                self.error = Some(format!("Error: {}", e));
                return Err(e);
            }
        }

        info!("Approval confirmed, submitting bridging deposit");
        let result = calls.bridge_deposit(amount_wei).await;
        self.loading = false;

        match result {
            Ok(tx) => {
                self.tx_hash = Some(tx.clone());
                Ok(tx)
            }
            Err(e) => {
                self.error = Some(format!("Error: {}", e));
                Err(e)
            }
        }
    }
}
