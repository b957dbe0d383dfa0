//! Tests for the wallet and configuration files.

use crossweth_cli::config::BridgeConfig;
use crossweth_cli::wallet::Wallet;
use ethers::signers::Signer;

/// Tests that a saved wallet keeps its identity across reloads.
#[test]
fn test_wallet_identity_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wallet.json");

    let wallet = Wallet::new().unwrap();
    let address = wallet.address().unwrap();
    wallet.save(&path).unwrap();

    let reloaded = Wallet::load(&path).unwrap();
    assert_eq!(reloaded.address().unwrap(), address);

    // The exported key parses back to the same signer
    let signer = reloaded.signer(1).unwrap();
    assert_eq!(signer.address(), address);
}

/// Tests that two fresh wallets never collide.
#[test]
fn test_fresh_wallets_are_distinct() {
    let a = Wallet::new().unwrap();
    let b = Wallet::new().unwrap();
    assert_ne!(a.address().unwrap(), b.address().unwrap());
}

/// Tests that a config file round trip preserves every field.
#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let mut config = BridgeConfig::default();
    config.rpc_url = "https://eth.example/rpc".to_string();
    config.fill_deadline_offset_secs = 1_200;
    config.to_file(&path).unwrap();

    let loaded = BridgeConfig::from_file(&path).unwrap();
    assert_eq!(loaded.rpc_url, config.rpc_url);
    assert_eq!(loaded.fill_deadline_offset_secs, 1_200);
    assert_eq!(loaded.destination_chain_id, 42161);
}
