//! Command-line client for wrapping ETH and bridging WETH over Across.

use anyhow::Result;
use colored::Colorize;
use crossweth_cli::commands::{balance, bridge, export, fees, init, status, unwrap, wrap};
use crossweth_cli::config::BridgeConfig;
use std::path::PathBuf;
use structopt::StructOpt;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Command line arguments for the client.
#[derive(Debug, StructOpt)]
#[structopt(name = "crossweth", about = "Wrap ETH and bridge WETH to Arbitrum over Across")]
struct Opt {
    /// Path to the configuration file
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// Path to the wallet file
    #[structopt(short, long, parse(from_os_str))]
    wallet: Option<PathBuf>,

    /// RPC endpoint to connect to
    #[structopt(short, long)]
    rpc: Option<String>,

    /// Subcommand to run
    #[structopt(subcommand)]
    cmd: Command,
}

/// Subcommands for the client.
#[derive(Debug, StructOpt)]
enum Command {
    /// Initialize a new wallet
    #[structopt(name = "init")]
    Init,

    /// Export the wallet's private key
    #[structopt(name = "export")]
    Export,

    /// Show the account's ETH and WETH balances
    #[structopt(name = "balance")]
    Balance,

    /// Wrap ETH into WETH
    #[structopt(name = "wrap")]
    Wrap {
        /// Amount of ETH to wrap
        #[structopt(long)]
        amount: String,
    },

    /// Unwrap WETH back to ETH
    #[structopt(name = "unwrap")]
    Unwrap {
        /// Amount of WETH to unwrap
        #[structopt(long)]
        amount: String,
    },

    /// Fetch the suggested bridging fees
    #[structopt(name = "fees")]
    Fees {
        /// Amount of ETH to quote
        #[structopt(long)]
        amount: String,
    },

    /// Approve and deposit WETH for bridging to the destination chain
    #[structopt(name = "bridge")]
    Bridge {
        /// Amount of WETH to bridge
        #[structopt(long)]
        amount: String,
    },

    /// Watch a submitted transaction for confirmation
    #[structopt(name = "status")]
    Status {
        /// Transaction hash to watch
        #[structopt(long)]
        tx: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse command line arguments
    let opt = Opt::from_args();

    // Load configuration
    let mut config = match &opt.config {
        Some(path) => BridgeConfig::from_file(path)?,
        None => BridgeConfig::default(),
    };

    // Override RPC endpoint if specified
    if let Some(rpc) = opt.rpc {
        config.rpc_url = rpc;
    }

    // Determine wallet file
    let wallet_file = match opt.wallet {
        Some(path) => path,
        None => {
            let mut dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
            dir.push("crossweth");
            dir.push("wallet.json");
            dir
        }
    };

    // Create parent directory if it doesn't exist
    if let Some(parent) = wallet_file.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Run the appropriate command
    match opt.cmd {
        Command::Init => {
            init::run(&wallet_file).await?;
            println!("{} {}", "Wallet initialized:".green(), wallet_file.display());
        }
        Command::Export => {
            let key = export::run(&wallet_file).await?;
            println!("{} {}", "Private key:".green(), key);
            println!("{}", "WARNING: Keep this key safe and private!".red());
        }
        Command::Balance => {
            balance::run(&config, &wallet_file).await?;
        }
        Command::Wrap { amount } => {
            let tx = wrap::run(&config, &wallet_file, &amount).await?;
            println!("{} {}", "Wrapped:".green(), tx);
        }
        Command::Unwrap { amount } => {
            let tx = unwrap::run(&config, &wallet_file, &amount).await?;
            println!("{} {}", "Unwrapped:".green(), tx);
        }
        Command::Fees { amount } => {
            fees::run(&config, &amount).await?;
        }
        Command::Bridge { amount } => {
            let tx = bridge::run(&config, &wallet_file, &amount).await?;
            println!("{} {}", "Bridged:".green(), tx);
        }
        Command::Status { tx } => {
            if status::run(&config, &tx).await? {
                println!("{}", "Transaction confirmed".green());
            } else {
                println!("{}", "Transaction not yet mined".yellow());
            }
        }
    }

    Ok(())
}
