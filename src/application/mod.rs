//! Command handlers and the bootstrap that wires them.

pub mod accounts;
pub mod session;
pub mod swap;

pub use session::{bootstrap, Session};

use anyhow::{Context, Result};
use solana_sdk::transaction::Transaction;

use crate::adapters::solana::SolanaClient;

/// Submit a signed transaction without preflight, then poll it to
/// confirmation, reporting the signature on both sides.
pub(crate) async fn submit_and_confirm(
    solana: &SolanaClient,
    transaction: &Transaction,
    label: &str,
) -> Result<String> {
    let signature = solana
        .send_transaction_skip_preflight(transaction)
        .await
        .with_context(|| format!("Failed to submit {} transaction", label))?;
    println!("{} transaction submitted: {}", label, signature);

    solana
        .wait_for_confirmation(&signature)
        .await
        .with_context(|| format!("Failed to confirm {} transaction {}", label, signature))?;
    println!("{} transaction confirmed: {}", label, signature);

    Ok(signature)
}
