use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("Failed to load keypair from file: {0}")]
    LoadError(String),
    #[error("Failed to sign transaction: {0}")]
    SigningError(String),
    #[error("Invalid keypair bytes: {0}")]
    InvalidKeypair(String),
}

/// A keypair identity loaded from a JSON-array-of-bytes file.
pub struct WalletManager {
    keypair: Keypair,
}

impl WalletManager {
    /// Load a keypair from a file path (JSON array format, as written by
    /// `solana-keygen`).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WalletError> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| WalletError::LoadError(format!("Failed to read file: {}", e)))?;

        let bytes: Vec<u8> = serde_json::from_str(&contents)
            .map_err(|e| WalletError::LoadError(format!("Invalid JSON format: {}", e)))?;

        Self::from_bytes(&bytes)
    }

    /// Build a wallet from raw secret-key bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WalletError> {
        let keypair = Keypair::try_from(bytes)
            .map_err(|e| WalletError::InvalidKeypair(e.to_string()))?;

        Ok(Self { keypair })
    }

    /// Create a random keypair (tests only).
    pub fn new_random() -> Self {
        Self {
            keypair: Keypair::new(),
        }
    }

    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    /// Sign a transaction in place against its recorded blockhash.
    pub fn sign_transaction(&self, transaction: &mut Transaction) -> Result<(), WalletError> {
        transaction
            .try_sign(&[&self.keypair], transaction.message.recent_blockhash)
            .map_err(|e| WalletError::SigningError(e.to_string()))
    }

    pub fn keypair(&self) -> &Keypair {
        &self.keypair
    }
}
