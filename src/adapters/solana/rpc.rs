use solana_account_decoder::UiAccountData;
use solana_client::rpc_client::RpcClient;
use solana_client::rpc_config::RpcSendTransactionConfig;
use solana_client::rpc_request::TokenAccountsFilter;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    program_pack::Pack,
    pubkey::Pubkey,
    signature::Signature,
    transaction::Transaction,
};
use spl_token::state::Account as SplTokenAccount;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::config;
use crate::domain::TokenAccountInfo;

#[derive(Debug, Error)]
pub enum SolanaClientError {
    #[error("RPC request failed: {0}")]
    RpcError(String),
    #[error("Transaction failed: {0}")]
    TransactionError(String),
    #[error("Invalid signature: {0}")]
    InvalidSignature(String),
    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),
    #[error("Timeout waiting for confirmation")]
    ConfirmationTimeout,
}

/// Wrapper around the blocking Solana RPC client with async-compatible
/// methods (each call runs on the blocking thread pool).
#[derive(Clone)]
pub struct SolanaClient {
    client: Arc<RpcClient>,
}

impl SolanaClient {
    /// Create a new Solana RPC client at confirmed commitment.
    pub fn new(rpc_url: String) -> Self {
        let client = Arc::new(RpcClient::new_with_commitment(
            rpc_url,
            CommitmentConfig::confirmed(),
        ));
        Self { client }
    }

    /// Get the SOL balance in lamports.
    pub async fn get_balance(&self, pubkey: Pubkey) -> Result<u64, SolanaClientError> {
        let client = Arc::clone(&self.client);
        tokio::task::spawn_blocking(move || {
            client
                .get_balance(&pubkey)
                .map_err(|e| SolanaClientError::RpcError(e.to_string()))
        })
        .await
        .map_err(|e| SolanaClientError::RpcError(format!("Task join error: {}", e)))?
    }

    /// Get a token account's raw balance, treating a missing account or an
    /// account not owned by the token program as a zero balance. Any other
    /// RPC failure propagates.
    pub async fn get_token_balance_or_default(
        &self,
        token_account: Pubkey,
    ) -> Result<u64, SolanaClientError> {
        let client = Arc::clone(&self.client);
        tokio::task::spawn_blocking(move || {
            let response = client
                .get_account_with_commitment(&token_account, client.commitment())
                .map_err(|e| SolanaClientError::RpcError(e.to_string()))?;

            let account = match response.value {
                Some(account) => account,
                None => return Ok(0),
            };
            if account.owner != spl_token::ID {
                return Ok(0);
            }

            let state = SplTokenAccount::unpack(&account.data)
                .map_err(|e| SolanaClientError::RpcError(format!("Account unpack: {}", e)))?;
            Ok(state.amount)
        })
        .await
        .map_err(|e| SolanaClientError::RpcError(format!("Task join error: {}", e)))?
    }

    /// Check whether an account exists on-chain.
    pub async fn account_exists(&self, pubkey: Pubkey) -> Result<bool, SolanaClientError> {
        let client = Arc::clone(&self.client);
        tokio::task::spawn_blocking(move || {
            client
                .get_account_with_commitment(&pubkey, client.commitment())
                .map(|response| response.value.is_some())
                .map_err(|e| SolanaClientError::RpcError(e.to_string()))
        })
        .await
        .map_err(|e| SolanaClientError::RpcError(format!("Task join error: {}", e)))?
    }

    /// Enumerate all SPL token accounts owned by `owner`, reading mint and
    /// raw balance out of the jsonParsed data returned by the enumeration
    /// call itself. Entries in an unexpected encoding are skipped; malformed
    /// fields in a parsed entry propagate as errors.
    pub async fn get_token_accounts(
        &self,
        owner: Pubkey,
    ) -> Result<Vec<TokenAccountInfo>, SolanaClientError> {
        let client = Arc::clone(&self.client);
        tokio::task::spawn_blocking(move || {
            let keyed = client
                .get_token_accounts_by_owner(&owner, TokenAccountsFilter::ProgramId(spl_token::ID))
                .map_err(|e| SolanaClientError::RpcError(e.to_string()))?;

            let mut accounts = Vec::with_capacity(keyed.len());
            for entry in keyed {
                if let Some(account) = parse_token_entry(&entry.pubkey, entry.account.data)? {
                    accounts.push(account);
                }
            }
            Ok(accounts)
        })
        .await
        .map_err(|e| SolanaClientError::RpcError(format!("Task join error: {}", e)))?
    }

    /// Get a recent blockhash for transaction building.
    pub async fn get_latest_blockhash(&self) -> Result<solana_sdk::hash::Hash, SolanaClientError> {
        let client = Arc::clone(&self.client);
        tokio::task::spawn_blocking(move || {
            client
                .get_latest_blockhash()
                .map_err(|e| SolanaClientError::RpcError(e.to_string()))
        })
        .await
        .map_err(|e| SolanaClientError::RpcError(format!("Task join error: {}", e)))?
    }

    /// Submit a signed transaction without preflight simulation.
    pub async fn send_transaction_skip_preflight(
        &self,
        transaction: &Transaction,
    ) -> Result<String, SolanaClientError> {
        let tx = transaction.clone();
        let client = Arc::clone(&self.client);
        tokio::task::spawn_blocking(move || {
            client
                .send_transaction_with_config(
                    &tx,
                    RpcSendTransactionConfig {
                        skip_preflight: true,
                        ..RpcSendTransactionConfig::default()
                    },
                )
                .map(|sig| sig.to_string())
                .map_err(|e| SolanaClientError::TransactionError(e.to_string()))
        })
        .await
        .map_err(|e| SolanaClientError::RpcError(format!("Task join error: {}", e)))?
    }

    /// Poll for confirmation of a submitted transaction, bounded by
    /// `config::CONFIRM_MAX_ATTEMPTS`.
    pub async fn wait_for_confirmation(
        &self,
        signature_str: &str,
    ) -> Result<(), SolanaClientError> {
        let signature = Signature::from_str(signature_str)
            .map_err(|e| SolanaClientError::InvalidSignature(e.to_string()))?;

        for _ in 0..config::CONFIRM_MAX_ATTEMPTS {
            let client = Arc::clone(&self.client);
            let confirmed = tokio::task::spawn_blocking(move || {
                client
                    .confirm_transaction(&signature)
                    .map_err(|e| SolanaClientError::TransactionError(e.to_string()))
            })
            .await
            .map_err(|e| SolanaClientError::RpcError(format!("Task join error: {}", e)))??;

            if confirmed {
                return Ok(());
            }
            tokio::time::sleep(Duration::from_millis(config::CONFIRM_POLL_MILLIS)).await;
        }

        Err(SolanaClientError::ConfirmationTimeout)
    }
}

/// Extract (mint, amount) from one jsonParsed enumeration entry. Entries in
/// an unexpected encoding yield `None`; malformed fields in a parsed entry
/// are errors.
fn parse_token_entry(
    pubkey: &str,
    data: UiAccountData,
) -> Result<Option<TokenAccountInfo>, SolanaClientError> {
    let address = Pubkey::from_str(pubkey)
        .map_err(|e| SolanaClientError::InvalidPublicKey(e.to_string()))?;
    let UiAccountData::Json(parsed) = data else {
        return Ok(None);
    };

    let info = &parsed.parsed["info"];
    let mint = info["mint"]
        .as_str()
        .ok_or_else(|| SolanaClientError::RpcError(format!("Missing mint for {}", address)))
        .and_then(|s| {
            Pubkey::from_str(s).map_err(|e| SolanaClientError::InvalidPublicKey(e.to_string()))
        })?;
    let amount = info["tokenAmount"]["amount"]
        .as_str()
        .ok_or_else(|| SolanaClientError::RpcError(format!("Missing amount for {}", address)))?
        .parse::<u64>()
        .map_err(|e| SolanaClientError::RpcError(format!("Parse error: {}", e)))?;

    Ok(Some(TokenAccountInfo {
        address,
        mint,
        amount,
    }))
}
