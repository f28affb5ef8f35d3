//! Incremental transaction draft.
//!
//! Command handlers accumulate instructions and required signers here before
//! deciding whether there is anything worth submitting at all.

use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;

/// An ordered instruction list plus the set of identities that must sign.
///
/// Signers are deduplicated by pubkey and kept in insertion order, so the
/// count observed mid-build (used for fee estimation) is stable.
#[derive(Debug, Default)]
pub struct TxDraft {
    instructions: Vec<Instruction>,
    signers: Vec<Pubkey>,
}

impl TxDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an instruction to the draft.
    pub fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    /// Record that `signer` must sign the final transaction. Duplicates are
    /// ignored.
    pub fn add_signer(&mut self, signer: Pubkey) {
        if !self.signers.contains(&signer) {
            self.signers.push(signer);
        }
    }

    /// Number of distinct signers recorded so far.
    pub fn signer_count(&self) -> usize {
        self.signers.len()
    }

    /// True when no instruction has been appended; an empty draft is never
    /// submitted.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn instruction_count(&self) -> usize {
        self.instructions.len()
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn signers(&self) -> &[Pubkey] {
        &self.signers
    }
}
