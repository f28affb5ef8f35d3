//! Instruction assembly for the account commands.
//!
//! These functions take pre-fetched chain state and append to a [`TxDraft`];
//! the handlers in `application` own the fetching and submission around them.

use solana_sdk::program_error::ProgramError;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_instruction;
use spl_associated_token_account::get_associated_token_address;
use spl_associated_token_account::instruction::create_associated_token_account;
use tracing::info;

use super::planner;
use super::TxDraft;
use crate::config;

/// One token account owned by a party: its address, the mint it holds, and
/// its raw balance.
#[derive(Debug, Clone, Copy)]
pub struct TokenAccountInfo {
    pub address: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
}

/// Append a creation instruction, paid for by `payer`, for every (owner,
/// mint) combination flagged as missing. Existing accounts contribute
/// nothing, so a fully-provisioned wallet pair leaves the draft untouched.
pub fn append_missing_creations(
    draft: &mut TxDraft,
    payer: &Pubkey,
    combos: &[(Pubkey, Pubkey, bool)],
) {
    for (owner, mint, exists) in combos {
        if *exists {
            continue;
        }
        info!(%owner, %mint, "creating associated token account");
        draft.push(create_associated_token_account(
            payer,
            owner,
            mint,
            &spl_token::ID,
        ));
    }
}

/// Append one party's close-and-sweep instructions.
///
/// Every enumerated token account is closed with rent reclaimed to
/// `receiver`; nonzero non-WSOL balances are transferred to the receiver's
/// associated account first (WSOL is released by the close itself). The
/// party's remaining SOL is then swept, with the fee-paying party keeping
/// back `signers-so-far x FEE_PER_SIGNATURE`; the deduction is computed
/// before the sweep marks the party as a signer, and a deduction at or past
/// the balance appends nothing.
pub fn append_close_and_sweep(
    draft: &mut TxDraft,
    owner: &Pubkey,
    accounts: &[TokenAccountInfo],
    native_balance: u64,
    receiver: &Pubkey,
    pays_fee: bool,
) -> Result<(), ProgramError> {
    let mut touched = false;
    for account in accounts {
        if account.amount > 0 && account.mint != config::WSOL_MINT {
            let destination = get_associated_token_address(receiver, &account.mint);
            info!(%owner, account = %account.address, amount = account.amount,
                  "transferring token balance to receiver");
            draft.push(spl_token::instruction::transfer(
                &spl_token::ID,
                &account.address,
                &destination,
                owner,
                &[],
                account.amount,
            )?);
        }
        info!(%owner, account = %account.address, "closing token account");
        draft.push(spl_token::instruction::close_account(
            &spl_token::ID,
            &account.address,
            receiver,
            owner,
            &[],
        )?);
        touched = true;
    }
    if touched {
        draft.add_signer(*owner);
    }

    if native_balance > 0 {
        let amount = planner::sweep_amount(
            native_balance,
            draft.signer_count(),
            pays_fee,
            config::FEE_PER_SIGNATURE,
        );
        if amount > 0 {
            info!(%owner, amount, "sweeping SOL balance to receiver");
            draft.push(system_instruction::transfer(owner, receiver, amount));
            draft.add_signer(*owner);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_account(mint: Pubkey, amount: u64) -> TokenAccountInfo {
        TokenAccountInfo {
            address: Pubkey::new_unique(),
            mint,
            amount,
        }
    }

    #[test]
    fn test_no_creations_when_all_accounts_exist() {
        let payer = Pubkey::new_unique();
        let combos = [
            (payer, config::WSOL_MINT, true),
            (payer, config::USDC_MINT, true),
            (Pubkey::new_unique(), config::WSOL_MINT, true),
            (Pubkey::new_unique(), config::USDC_MINT, true),
        ];

        let mut draft = TxDraft::new();
        append_missing_creations(&mut draft, &payer, &combos);
        assert!(draft.is_empty());
    }

    #[test]
    fn test_one_creation_per_missing_account() {
        let payer = Pubkey::new_unique();
        let collector = Pubkey::new_unique();
        let combos = [
            (payer, config::WSOL_MINT, true),
            (payer, config::USDC_MINT, false),
            (collector, config::WSOL_MINT, false),
            (collector, config::USDC_MINT, true),
        ];

        let mut draft = TxDraft::new();
        append_missing_creations(&mut draft, &payer, &combos);

        assert_eq!(draft.instruction_count(), 2);
        // The payer funds every creation.
        for instruction in draft.instructions() {
            assert_eq!(instruction.accounts[0].pubkey, payer);
        }
    }

    #[test]
    fn test_close_draft_empty_when_no_accounts_and_no_balance() {
        let mut draft = TxDraft::new();
        append_close_and_sweep(
            &mut draft,
            &Pubkey::new_unique(),
            &[],
            0,
            &Pubkey::new_unique(),
            false,
        )
        .unwrap();
        assert!(draft.is_empty());
        assert_eq!(draft.signer_count(), 0);
    }

    #[test]
    fn test_wsol_account_closed_but_never_transferred() {
        let owner = Pubkey::new_unique();
        let accounts = [token_account(config::WSOL_MINT, 7_000)];

        let mut draft = TxDraft::new();
        append_close_and_sweep(&mut draft, &owner, &accounts, 0, &Pubkey::new_unique(), true)
            .unwrap();

        // One close instruction only, no token transfer.
        assert_eq!(draft.instruction_count(), 1);
        assert_eq!(draft.instructions()[0].program_id, spl_token::ID);
    }

    #[test]
    fn test_nonzero_token_balance_transferred_then_closed() {
        let owner = Pubkey::new_unique();
        let accounts = [token_account(config::USDC_MINT, 500)];

        let mut draft = TxDraft::new();
        append_close_and_sweep(&mut draft, &owner, &accounts, 0, &Pubkey::new_unique(), true)
            .unwrap();

        assert_eq!(draft.instruction_count(), 2);
        assert_eq!(draft.signers(), &[owner]);
    }

    #[test]
    fn test_zero_balance_account_only_closed() {
        let owner = Pubkey::new_unique();
        let accounts = [token_account(config::USDC_MINT, 0)];

        let mut draft = TxDraft::new();
        append_close_and_sweep(&mut draft, &owner, &accounts, 0, &Pubkey::new_unique(), true)
            .unwrap();

        assert_eq!(draft.instruction_count(), 1);
    }

    #[test]
    fn test_fee_payer_sweep_deducts_fee_per_recorded_signer() {
        // One stable account with balance 500 marks the owner as the sole
        // signer; the SOL sweep of 10_000 must then carry 10_000 - 1 * 5_000.
        let owner = Pubkey::new_unique();
        let receiver = Pubkey::new_unique();
        let accounts = [token_account(config::USDC_MINT, 500)];

        let mut draft = TxDraft::new();
        append_close_and_sweep(&mut draft, &owner, &accounts, 10_000, &receiver, true).unwrap();

        // transfer + close + SOL sweep
        assert_eq!(draft.instruction_count(), 3);
        let sweep = &draft.instructions()[2];
        let expected = system_instruction::transfer(&owner, &receiver, 5_000);
        assert_eq!(sweep.data, expected.data);
    }

    #[test]
    fn test_non_payer_sweeps_full_balance() {
        let collector = Pubkey::new_unique();
        let receiver = Pubkey::new_unique();

        let mut draft = TxDraft::new();
        append_close_and_sweep(&mut draft, &collector, &[], 10_000, &receiver, false).unwrap();

        assert_eq!(draft.instruction_count(), 1);
        let expected = system_instruction::transfer(&collector, &receiver, 10_000);
        assert_eq!(draft.instructions()[0].data, expected.data);
        assert_eq!(draft.signers(), &[collector]);
    }

    #[test]
    fn test_fee_payer_sweep_skipped_when_fee_exceeds_balance() {
        let owner = Pubkey::new_unique();
        let accounts = [token_account(config::USDC_MINT, 500)];

        // Balance equals the estimated fee: nothing to sweep, no extra signer
        // marking beyond the token instructions.
        let mut draft = TxDraft::new();
        append_close_and_sweep(&mut draft, &owner, &accounts, 5_000, &Pubkey::new_unique(), true)
            .unwrap();

        assert_eq!(draft.instruction_count(), 2);
        assert_eq!(draft.signer_count(), 1);
    }

    #[test]
    fn test_earlier_party_signers_raise_the_fee_deduction() {
        // Collector sweep records one signer before the fee payer's deduction
        // is computed; the payer's token instructions record a second. The
        // payer's sweep then deducts 2 x fee.
        let user = Pubkey::new_unique();
        let collector = Pubkey::new_unique();
        let receiver = Pubkey::new_unique();

        let mut draft = TxDraft::new();
        append_close_and_sweep(&mut draft, &collector, &[], 1_000, &receiver, false).unwrap();
        append_close_and_sweep(
            &mut draft,
            &user,
            &[token_account(config::USDC_MINT, 42)],
            100_000,
            &receiver,
            true,
        )
        .unwrap();

        let sweep = draft.instructions().last().unwrap();
        let expected = system_instruction::transfer(&user, &receiver, 100_000 - 2 * 5_000);
        assert_eq!(sweep.data, expected.data);
        assert_eq!(draft.signers(), &[collector, user]);
    }
}
