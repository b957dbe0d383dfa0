//! Integration tests for the crossweth bridging client.

pub mod bridge_tests;
pub mod fee_tests;
pub mod session_tests;
pub mod wallet_tests;
