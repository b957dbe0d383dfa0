//! Tests for the contract layer.

use crossweth_bridge::{new_client_with_wallet, BridgeError, ContractAddresses, TxSettings};
use ethers::signers::LocalWallet;
use serial_test::serial;
use tokio::runtime::Runtime;

fn test_wallet() -> LocalWallet {
    "0x0123456789012345678901234567890123456789012345678901234567890123"
        .parse::<LocalWallet>()
        .unwrap()
}

/// Tests that a client can be constructed with the default addresses.
#[test]
fn test_client_construction() {
    let client = new_client_with_wallet(
        "http://localhost:8545",
        test_wallet(),
        &ContractAddresses::default(),
        TxSettings::default(),
    );
    assert!(client.is_ok());
}

/// Tests that a malformed contract address is rejected at construction.
#[test]
fn test_client_rejects_malformed_address() {
    let addresses = ContractAddresses {
        spoke_pool: "0xnot-a-contract".to_string(),
        ..ContractAddresses::default()
    };
    let client = new_client_with_wallet(
        "http://localhost:8545",
        test_wallet(),
        &addresses,
        TxSettings::default(),
    );
    assert!(matches!(client, Err(BridgeError::InvalidAddress(_))));
}

/// Tests wrapping ETH into WETH.
#[test]
#[serial]
#[ignore] // Requires a local Ethereum node with a funded account
fn test_wrap_eth() {
    let rt = Runtime::new().unwrap();

    rt.block_on(async {
        let client = new_client_with_wallet(
            "http://localhost:8545",
            test_wallet(),
            &ContractAddresses::default(),
            TxSettings::default(),
        )
        .unwrap();

        let tx_hash = client.wrap(1_000_000_000_000_000).await.unwrap();

        // The transaction must be mined within the configured timeout
        let receipt = client.wait_for_receipt(tx_hash).await.unwrap();
        assert!(receipt.is_some());
    });
}

/// Tests the approve-then-deposit bridging flow.
#[test]
#[serial]
#[ignore] // Requires a local Ethereum node with a funded, wrapped account
fn test_approve_and_deposit_flow() {
    let rt = Runtime::new().unwrap();

    rt.block_on(async {
        let client = new_client_with_wallet(
            "http://localhost:8545",
            test_wallet(),
            &ContractAddresses::default(),
            TxSettings::default(),
        )
        .unwrap();

        let amount = 1_000_000_000_000_000;

        let approve_tx = client.approve(amount).await.unwrap();
        let receipt = client.wait_for_receipt(approve_tx).await.unwrap();
        assert!(receipt.is_some());

        let allowance = client.spoke_pool_allowance(client.account()).await.unwrap();
        assert!(allowance >= amount);

        let deposit_tx = client.deposit_for_bridging(amount).await.unwrap();
        let receipt = client.wait_for_receipt(deposit_tx).await.unwrap();
        assert!(receipt.is_some());
    });
}

/// Tests reading balances.
#[test]
#[serial]
#[ignore] // Requires a local Ethereum node
fn test_read_balances() {
    let rt = Runtime::new().unwrap();

    rt.block_on(async {
        let client = new_client_with_wallet(
            "http://localhost:8545",
            test_wallet(),
            &ContractAddresses::default(),
            TxSettings::default(),
        )
        .unwrap();

        let account = client.account();
        assert!(client.eth_balance(account).await.is_ok());
        assert!(client.weth_balance(account).await.is_ok());
    });
}
