//! Session bootstrap: keypairs, derived token addresses, a one-shot balance
//! snapshot and the two SDK handles every command reads from.

use anyhow::{Context, Result};
use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account::get_associated_token_address;
use std::collections::HashMap;
use tokio::try_join;
use tracing::debug;

use crate::adapters::jupiter::{JupiterClient, JupiterConfig};
use crate::adapters::solana::{SolanaClient, WalletManager};
use crate::config;

/// The four associated token addresses: both parties, both mints.
/// Pure function of (owner, mint), stable across runs.
#[derive(Debug, Clone, Copy)]
pub struct TokenAddresses {
    pub user_wsol: Pubkey,
    pub user_usdc: Pubkey,
    pub collector_wsol: Pubkey,
    pub collector_usdc: Pubkey,
}

impl TokenAddresses {
    pub fn derive(user: &Pubkey, collector: &Pubkey) -> Self {
        Self {
            user_wsol: get_associated_token_address(user, &config::WSOL_MINT),
            user_usdc: get_associated_token_address(user, &config::USDC_MINT),
            collector_wsol: get_associated_token_address(collector, &config::WSOL_MINT),
            collector_usdc: get_associated_token_address(collector, &config::USDC_MINT),
        }
    }
}

/// Balances fetched once at startup. Commands read this snapshot as-is; it
/// is never refreshed mid-run, so balances may be stale by submission time.
#[derive(Debug, Clone, Copy)]
pub struct BalanceSnapshot {
    pub user_sol: u64,
    pub user_wsol: u64,
    pub user_usdc: u64,
    pub collector_sol: u64,
    pub collector_wsol: u64,
    pub collector_usdc: u64,
}

/// Everything a command handler needs. Read-only after construction.
pub struct Session {
    pub user: WalletManager,
    pub collector: WalletManager,
    pub addresses: TokenAddresses,
    pub balances: BalanceSnapshot,
    pub solana: SolanaClient,
    pub jupiter: JupiterClient,
}

/// Load keypairs, derive addresses, snapshot balances and initialize the
/// Jupiter client. Any failure here is fatal to the process.
pub async fn bootstrap() -> Result<Session> {
    let (user, collector) = try_join!(
        load_wallet(config::USER_KEYPAIR_PATH),
        load_wallet(config::COLLECTOR_KEYPAIR_PATH),
    )?;

    let solana = SolanaClient::new(config::RPC_URL.to_string());
    let addresses = TokenAddresses::derive(&user.pubkey(), &collector.pubkey());

    let (user_sol, collector_sol, user_wsol, user_usdc, collector_wsol, collector_usdc) = try_join!(
        solana.get_balance(user.pubkey()),
        solana.get_balance(collector.pubkey()),
        solana.get_token_balance_or_default(addresses.user_wsol),
        solana.get_token_balance_or_default(addresses.user_usdc),
        solana.get_token_balance_or_default(addresses.collector_wsol),
        solana.get_token_balance_or_default(addresses.collector_usdc),
    )
    .context("Failed to fetch balance snapshot")?;

    let balances = BalanceSnapshot {
        user_sol,
        user_wsol,
        user_usdc,
        collector_sol,
        collector_wsol,
        collector_usdc,
    };
    debug!(?balances, "balance snapshot taken");

    // Platform fees collect into the collector's token accounts.
    let fee_accounts = HashMap::from([
        (config::WSOL_MINT, addresses.collector_wsol),
        (config::USDC_MINT, addresses.collector_usdc),
    ]);
    let jupiter = JupiterClient::new(JupiterConfig::new(
        user.pubkey(),
        config::PLATFORM_FEE_BPS,
        fee_accounts,
    ))
    .context("Failed to initialize Jupiter client")?;

    Ok(Session {
        user,
        collector,
        addresses,
        balances,
        solana,
        jupiter,
    })
}

async fn load_wallet(path: &'static str) -> Result<WalletManager> {
    tokio::task::spawn_blocking(move || WalletManager::from_file(path))
        .await
        .context("Keypair load task failed")?
        .with_context(|| format!("Failed to load keypair from '{}'", path))
}
