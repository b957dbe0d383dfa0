//! Fees command for the command-line client.

use crate::commands::fee_client;
use crate::config::BridgeConfig;
use crate::errors::CliError;
use colored::Colorize;
use crossweth_core::amount;
use crossweth_core::types::{format_eth, FeeQuote};
use crossweth_core::Session;
use tracing::info;

/// Runs the fees command.
pub async fn run(config: &BridgeConfig, amount: &str) -> Result<FeeQuote, CliError> {
    let quotes = fee_client(config);
    info!(
        "Quoting fees for {} ETH from chain {} to chain {}",
        amount, config.origin_chain_id, config.destination_chain_id
    );

    // Quoting needs no wallet, only a valid amount.
    let mut session = Session::new(None);
    session.set_amount(amount);

    let quote = session.fetch_fees(&quotes).await?;
    let amount_units = amount::to_quote_units(amount)?;

    println!("{}", "Estimated fees".bold());
    println!("  Capital fee:   {} WETH", format_eth(quote.capital_fee_total));
    println!("  Relay fee:     {} WETH", format_eth(quote.relay_fee_total));
    println!("  Relay gas fee: {} WETH", format_eth(quote.relay_gas_fee_total));
    if let Some(lp) = quote.lp_fee_total {
        println!("  LP fee:        {} WETH", format_eth(lp));
    }
    if let Some(total) = quote.total_relay_fee {
        println!("  Quoted relay total: {} WETH", format_eth(total));
    }

    match quote.percent_of(amount_units) {
        Some(pct) => println!(
            "  {} {} WETH ({:.4}% of transfer)",
            "Total fee:".bold(),
            format_eth(quote.total_wei()),
            pct
        ),
        None => println!(
            "  {} {} WETH",
            "Total fee:".bold(),
            format_eth(quote.total_wei())
        ),
    }

    Ok(quote)
}
