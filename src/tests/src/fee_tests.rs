//! Tests for the fee quoting client.

use crossweth_cli::config::BridgeConfig;
use crossweth_core::Session;
use crossweth_fees::FeeClient;
use serial_test::serial;
use tokio::runtime::Runtime;

fn fee_client_from(config: &BridgeConfig) -> FeeClient {
    FeeClient::new(
        &config.fee_api_url,
        &config.weth_address,
        &config.destination_weth_address,
        config.origin_chain_id,
        config.destination_chain_id,
    )
}

/// Tests that the default configuration produces the canonical quote URL.
#[test]
fn test_default_config_quote_url() {
    let client = fee_client_from(&BridgeConfig::default());
    let url = client.quote_url(1_000_000_000_000_000_000);

    assert!(url.starts_with("https://app.across.to/api/suggested-fees?"));
    assert!(url.contains("inputToken=0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"));
    assert!(url.contains("outputToken=0x82aF49447D8a07e3bd95BD0d56f35241523fBab1"));
    assert!(url.contains("originChainId=1"));
    assert!(url.contains("destinationChainId=42161"));
    assert!(url.contains("amount=1000000000000000000"));
}

/// Tests fetching a live quote from the Across API.
#[test]
#[serial]
#[ignore] // Requires network access to the live fee API
fn test_live_suggested_fees() {
    let rt = Runtime::new().unwrap();

    rt.block_on(async {
        let quotes = fee_client_from(&BridgeConfig::default());
        let quote = quotes.suggested_fees(1_000_000_000_000_000_000).await.unwrap();

        assert!(quote.relay_fee_total > 0);
        assert!(quote.total_wei() >= quote.relay_fee_total);
    });
}

/// Tests a live quote driven through the session handler.
#[test]
#[serial]
#[ignore] // Requires network access to the live fee API
fn test_live_quote_through_session() {
    let rt = Runtime::new().unwrap();

    rt.block_on(async {
        let quotes = fee_client_from(&BridgeConfig::default());
        let mut session = Session::new(None);
        session.set_amount("0.5");

        let quote = session.fetch_fees(&quotes).await.unwrap();
        assert_eq!(session.fee_quote.as_ref(), Some(&quote));
        assert!(session.error.is_none());
        assert!(!session.fetching_fees);
    });
}
