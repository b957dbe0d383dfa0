//! HTTP client for the Across suggested-fees endpoint.

use crate::errors::FeeError;
use async_trait::async_trait;
use crossweth_core::errors::CoreError;
use crossweth_core::session::QuoteCapability;
use crossweth_core::types::{FeeQuote, Wei};
use serde::Deserialize;
use tracing::debug;

/// Wire format of a suggested-fees response. All fee values are base-unit
/// integers encoded as decimal strings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SuggestedFeesResponse {
    capital_fee_total: String,
    relay_fee_total: String,
    relay_gas_fee_total: String,
    lp_fee_total: Option<String>,
    total_relay_fee: Option<TotalRelayFee>,
}

#[derive(Debug, Deserialize)]
struct TotalRelayFee {
    total: String,
}

/// Client for one fixed token/chain pair against the quoting endpoint.
pub struct FeeClient {
    http: reqwest::Client,
    endpoint: String,
    input_token: String,
    output_token: String,
    origin_chain_id: u64,
    destination_chain_id: u64,
}

impl FeeClient {
    /// Creates a client quoting transfers of `input_token` on the origin
    /// chain into `output_token` on the destination chain.
    pub fn new(
        endpoint: &str,
        input_token: &str,
        output_token: &str,
        origin_chain_id: u64,
        destination_chain_id: u64,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
            input_token: input_token.to_string(),
            output_token: output_token.to_string(),
            origin_chain_id,
            destination_chain_id,
        }
    }

    /// Builds the query URL for the given base-unit amount.
    pub fn quote_url(&self, amount_units: Wei) -> String {
        format!(
            "{}?inputToken={}&outputToken={}&originChainId={}&destinationChainId={}&amount={}",
            self.endpoint,
            self.input_token,
            self.output_token,
            self.origin_chain_id,
            self.destination_chain_id,
            amount_units
        )
    }

    /// Fetches the suggested fee breakdown for the given base-unit amount.
    ///
    /// Each invocation issues a fresh request; there is no retry or caching.
    pub async fn suggested_fees(&self, amount_units: Wei) -> Result<FeeQuote, FeeError> {
        let url = self.quote_url(amount_units);
        debug!("Requesting suggested fees: {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FeeError::Network(format!("Failed to reach fee API: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeeError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FeeError::Network(format!("Failed to read response: {}", e)))?;

        parse_fees(&body)
    }
}

/// Parses a suggested-fees response body.
pub fn parse_fees(body: &str) -> Result<FeeQuote, FeeError> {
    if body.trim().is_empty() {
        return Err(FeeError::EmptyResponse);
    }

    let response: SuggestedFeesResponse = serde_json::from_str(body)
        .map_err(|e| FeeError::InvalidResponse(e.to_string()))?;

    Ok(FeeQuote {
        capital_fee_total: parse_units(&response.capital_fee_total, "capitalFeeTotal")?,
        relay_fee_total: parse_units(&response.relay_fee_total, "relayFeeTotal")?,
        relay_gas_fee_total: parse_units(&response.relay_gas_fee_total, "relayGasFeeTotal")?,
        lp_fee_total: response
            .lp_fee_total
            .as_deref()
            .map(|v| parse_units(v, "lpFeeTotal"))
            .transpose()?,
        total_relay_fee: response
            .total_relay_fee
            .as_ref()
            .map(|v| parse_units(&v.total, "totalRelayFee.total"))
            .transpose()?,
    })
}

fn parse_units(value: &str, field: &str) -> Result<Wei, FeeError> {
    value
        .parse()
        .map_err(|e| FeeError::InvalidResponse(format!("{}: {}", field, e)))
}

#[async_trait]
impl QuoteCapability for FeeClient {
    async fn suggested_fees(&self, amount_units: Wei) -> Result<FeeQuote, CoreError> {
        FeeClient::suggested_fees(self, amount_units)
            .await
            .map_err(|e| CoreError::QuoteFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossweth_core::types::{
        CHAIN_ID_ARBITRUM, CHAIN_ID_MAINNET, SUGGESTED_FEES_URL, WETH_ARBITRUM, WETH_MAINNET,
    };

    fn client() -> FeeClient {
        FeeClient::new(
            SUGGESTED_FEES_URL,
            WETH_MAINNET,
            WETH_ARBITRUM,
            CHAIN_ID_MAINNET,
            CHAIN_ID_ARBITRUM,
        )
    }

    #[test]
    fn test_quote_url_layout() {
        let url = client().quote_url(2_500_000_000_000_000_000);
        assert_eq!(
            url,
            "https://app.across.to/api/suggested-fees\
             ?inputToken=0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2\
             &outputToken=0x82aF49447D8a07e3bd95BD0d56f35241523fBab1\
             &originChainId=1\
             &destinationChainId=42161\
             &amount=2500000000000000000"
        );
    }

    #[test]
    fn test_parse_full_response() {
        let body = r#"{
            "capitalFeeTotal": "100",
            "relayFeeTotal": "50",
            "relayGasFeeTotal": "25",
            "lpFeeTotal": "10",
            "totalRelayFee": { "total": "75" }
        }"#;
        let quote = parse_fees(body).unwrap();
        assert_eq!(quote.capital_fee_total, 100);
        assert_eq!(quote.relay_fee_total, 50);
        assert_eq!(quote.relay_gas_fee_total, 25);
        assert_eq!(quote.lp_fee_total, Some(10));
        assert_eq!(quote.total_relay_fee, Some(75));
        assert_eq!(quote.total_wei(), 175);
    }

    #[test]
    fn test_parse_without_optional_fields() {
        let body = r#"{
            "capitalFeeTotal": "100",
            "relayFeeTotal": "50",
            "relayGasFeeTotal": "25"
        }"#;
        let quote = parse_fees(body).unwrap();
        assert_eq!(quote.lp_fee_total, None);
        assert_eq!(quote.total_relay_fee, None);
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let body = r#"{
            "capitalFeeTotal": "1",
            "relayFeeTotal": "2",
            "relayGasFeeTotal": "3",
            "spokePoolAddress": "0x5c7BCd6E7De5423a257D81B442095A1a6ced35C5",
            "timestamp": "1700000000"
        }"#;
        assert!(parse_fees(body).is_ok());
    }

    #[test]
    fn test_empty_body_is_an_error() {
        assert!(matches!(parse_fees(""), Err(FeeError::EmptyResponse)));
        assert!(matches!(parse_fees("  \n"), Err(FeeError::EmptyResponse)));
    }

    #[test]
    fn test_missing_required_field_is_an_error() {
        let body = r#"{ "capitalFeeTotal": "100" }"#;
        assert!(matches!(parse_fees(body), Err(FeeError::InvalidResponse(_))));
    }

    #[test]
    fn test_non_numeric_fee_is_an_error() {
        let body = r#"{
            "capitalFeeTotal": "lots",
            "relayFeeTotal": "50",
            "relayGasFeeTotal": "25"
        }"#;
        assert!(matches!(parse_fees(body), Err(FeeError::InvalidResponse(_))));
    }
}
