//! Account commands: print the snapshot, create missing associated token
//! accounts, close accounts and sweep everything to a receiver.

use anyhow::{Context, Result};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::transaction::Transaction;
use tracing::debug;

use super::{submit_and_confirm, Session};
use crate::config;
use crate::domain::planner;
use crate::domain::{assemble, TxDraft};

/// Print addresses and the startup balance snapshot for both parties.
pub fn print_accounts(session: &Session) {
    let addresses = &session.addresses;
    let balances = &session.balances;

    println!("cluster: {}", config::CLUSTER);
    println!();
    println!("user wallet:       {}", session.user.pubkey());
    println!("  WSOL account:    {}", addresses.user_wsol);
    println!("  USDC account:    {}", addresses.user_usdc);
    println!("  SOL balance:     {}", planner::display_sol(balances.user_sol));
    println!("  WSOL balance:    {}", planner::display_sol(balances.user_wsol));
    println!("  USDC balance:    {}", planner::display_usdc(balances.user_usdc));
    println!();
    println!("collector wallet:  {}", session.collector.pubkey());
    println!("  WSOL account:    {}", addresses.collector_wsol);
    println!("  USDC account:    {}", addresses.collector_usdc);
    println!("  SOL balance:     {}", planner::display_sol(balances.collector_sol));
    println!("  WSOL balance:    {}", planner::display_sol(balances.collector_wsol));
    println!("  USDC balance:    {}", planner::display_usdc(balances.collector_usdc));
    println!();
    println!("fund the user wallet at: {}", session.user.pubkey());
}

/// Create the missing associated token accounts for both parties and both
/// mints, in one transaction paid for and signed by the user.
pub async fn create_accounts(session: &Session) -> Result<()> {
    let user_pubkey = session.user.pubkey();
    let collector_pubkey = session.collector.pubkey();
    let addresses = &session.addresses;

    let combos = [
        (user_pubkey, config::WSOL_MINT, addresses.user_wsol),
        (user_pubkey, config::USDC_MINT, addresses.user_usdc),
        (collector_pubkey, config::WSOL_MINT, addresses.collector_wsol),
        (collector_pubkey, config::USDC_MINT, addresses.collector_usdc),
    ];

    let mut checked = Vec::with_capacity(combos.len());
    for (owner, mint, address) in combos {
        let exists = session
            .solana
            .account_exists(address)
            .await
            .with_context(|| format!("Failed to check token account {}", address))?;
        if exists {
            debug!(%address, "token account already exists");
        }
        checked.push((owner, mint, exists));
    }

    let mut draft = TxDraft::new();
    assemble::append_missing_creations(&mut draft, &user_pubkey, &checked);

    if draft.is_empty() {
        println!("nothing to create");
        return Ok(());
    }

    let blockhash = session
        .solana
        .get_latest_blockhash()
        .await
        .context("Failed to fetch blockhash")?;
    let transaction = Transaction::new_signed_with_payer(
        draft.instructions(),
        Some(&user_pubkey),
        &[session.user.keypair()],
        blockhash,
    );

    submit_and_confirm(&session.solana, &transaction, "create").await?;
    Ok(())
}

/// Close both parties' token accounts and sweep all funds to `receiver`:
/// non-WSOL token balances move to the receiver's associated accounts, every
/// enumerated account is closed with rent reclaimed to the receiver, and each
/// party's remaining SOL is transferred out. Only the user, as fee payer,
/// keeps back an estimated network fee.
pub async fn close_accounts(session: &Session, receiver: &Pubkey) -> Result<()> {
    let user_pubkey = session.user.pubkey();
    let mut draft = TxDraft::new();

    // Collector first, then user: the user's fee deduction depends on the
    // signer count collected up to that point.
    for wallet in [&session.collector, &session.user] {
        let owner = wallet.pubkey();

        let accounts = session
            .solana
            .get_token_accounts(owner)
            .await
            .with_context(|| format!("Failed to enumerate token accounts of {}", owner))?;
        let balance = session
            .solana
            .get_balance(owner)
            .await
            .with_context(|| format!("Failed to fetch SOL balance of {}", owner))?;

        assemble::append_close_and_sweep(
            &mut draft,
            &owner,
            &accounts,
            balance,
            receiver,
            owner == user_pubkey,
        )?;
    }

    if draft.is_empty() {
        println!("nothing to close");
        return Ok(());
    }

    // The user pays the transaction fee and must sign even without own
    // instructions.
    draft.add_signer(user_pubkey);

    let signers: Vec<&Keypair> = draft
        .signers()
        .iter()
        .map(|pubkey| {
            if *pubkey == user_pubkey {
                session.user.keypair()
            } else {
                session.collector.keypair()
            }
        })
        .collect();

    let blockhash = session
        .solana
        .get_latest_blockhash()
        .await
        .context("Failed to fetch blockhash")?;
    let transaction = Transaction::new_signed_with_payer(
        draft.instructions(),
        Some(&user_pubkey),
        &signers,
        blockhash,
    );

    submit_and_confirm(&session.solana, &transaction, "close").await?;
    Ok(())
}
