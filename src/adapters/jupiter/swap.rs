//! Jupiter Swap Types
//!
//! Request and response structures for the swap endpoint, which turns a
//! chosen route into up to three serialized transactions.

use serde::{Deserialize, Serialize};

/// Request parameters for building the swap transaction set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
    /// The route chosen from the quote response, passed back verbatim
    pub route: serde_json::Value,
    /// Acting wallet address
    pub user_public_key: String,
    /// Token account collecting the platform fee, for the output mint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_account: Option<String>,
    /// Wrap/unwrap SOL automatically around the swap
    #[serde(default = "default_wrap_unwrap_sol")]
    pub wrap_unwrap_sol: bool,
}

fn default_wrap_unwrap_sol() -> bool {
    true
}

impl SwapRequest {
    pub fn new(route: serde_json::Value, user_public_key: String) -> Self {
        Self {
            route,
            user_public_key,
            fee_account: None,
            wrap_unwrap_sol: true,
        }
    }

    /// Set the platform-fee collection account.
    pub fn with_fee_account(mut self, fee_account: String) -> Self {
        self.fee_account = Some(fee_account);
        self
    }
}

/// Response from the swap endpoint: three named transaction slots, each a
/// base64-encoded serialized transaction, any of which may be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapTransactions {
    #[serde(default)]
    pub setup_transaction: Option<String>,
    #[serde(default)]
    pub swap_transaction: Option<String>,
    #[serde(default)]
    pub cleanup_transaction: Option<String>,
}

impl SwapTransactions {
    /// The present transactions in execution order, labeled.
    pub fn in_order(&self) -> Vec<(&'static str, &str)> {
        [
            ("setup", &self.setup_transaction),
            ("swap", &self.swap_transaction),
            ("cleanup", &self.cleanup_transaction),
        ]
        .into_iter()
        .filter_map(|(label, tx)| tx.as_deref().map(|t| (label, t)))
        .collect()
    }
}
