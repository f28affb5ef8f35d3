//! CLI command definitions.

use clap::{Parser, Subcommand};
use solana_sdk::pubkey::Pubkey;

/// tokenops - Solana token-account manager and single-shot Jupiter swap
#[derive(Parser, Debug)]
#[command(
    name = "tokenops",
    version = env!("CARGO_PKG_VERSION"),
    about = "Manage token accounts and perform a single Jupiter swap",
    long_about = "Prints balances, creates missing associated token accounts, closes token \
                  accounts sweeping funds to a receiver, and executes one swap route."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print addresses and balances for both wallets
    AccountsPrint,

    /// Create any missing associated token accounts
    AccountsCreate,

    /// Close token accounts and sweep all funds to a receiver
    AccountsClose(CloseCmd),

    /// Perform one swap between SOL and USDC
    Swap,
}

/// Close accounts and sweep funds
#[derive(Parser, Debug)]
pub struct CloseCmd {
    /// Address receiving swept tokens, reclaimed rent and remaining SOL
    #[arg(long, value_name = "ADDRESS")]
    pub receiver: Pubkey,
}
