//! Core types for the crossweth bridging client.

use serde::{Deserialize, Serialize};

/// Amount in the token's base unit (wei), represented as a 128-bit unsigned
/// integer.
pub type Wei = u128;

/// Opaque transaction identifier returned by a submission, as a 0x-prefixed
/// hash string.
pub type TxId = String;

/// WETH on Ethereum mainnet.
pub const WETH_MAINNET: &str = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";

/// WETH on Arbitrum One.
pub const WETH_ARBITRUM: &str = "0x82aF49447D8a07e3bd95BD0d56f35241523fBab1";

/// The Across SpokePool contract on Ethereum mainnet.
pub const SPOKE_POOL_MAINNET: &str = "0x5c7BCd6E7De5423a257D81B442095A1a6ced35C5";

/// Chain id of Ethereum mainnet.
pub const CHAIN_ID_MAINNET: u64 = 1;

/// Chain id of Arbitrum One.
pub const CHAIN_ID_ARBITRUM: u64 = 42161;

/// The Across fee quoting endpoint.
pub const SUGGESTED_FEES_URL: &str = "https://app.across.to/api/suggested-fees";

/// Number of wei in one ETH.
pub const WEI_PER_ETH: u128 = 1_000_000_000_000_000_000;

/// A fee breakdown returned by the quoting API, all values in base units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeQuote {
    /// Fee charged for the relayer's capital commitment
    pub capital_fee_total: Wei,
    /// Total fee paid to the relayer
    pub relay_fee_total: Wei,
    /// Gas portion of the relayer fee
    pub relay_gas_fee_total: Wei,
    /// Fee paid to liquidity providers, when reported
    pub lp_fee_total: Option<Wei>,
    /// The API's own relay fee total, when reported
    pub total_relay_fee: Option<Wei>,
}

impl FeeQuote {
    /// Returns the total displayed fee: capital + relay + relay gas.
    pub fn total_wei(&self) -> Wei {
        self.capital_fee_total
            .saturating_add(self.relay_fee_total)
            .saturating_add(self.relay_gas_fee_total)
    }

    /// Returns the total fee as a percentage of the transferred amount.
    ///
    /// Returns `None` when the amount is zero.
    pub fn percent_of(&self, amount_wei: Wei) -> Option<f64> {
        if amount_wei == 0 {
            return None;
        }
        Some(self.total_wei() as f64 / amount_wei as f64 * 100.0)
    }
}

/// Formats a wei amount as a decimal ETH string, trimming trailing zeros.
pub fn format_eth(wei: Wei) -> String {
    let whole = wei / WEI_PER_ETH;
    let frac = wei % WEI_PER_ETH;
    if frac == 0 {
        return whole.to_string();
    }
    let frac = format!("{:018}", frac);
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}
