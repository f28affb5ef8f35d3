//! Jupiter API Client
//!
//! HTTP client for the Jupiter DEX aggregator. Carries the acting wallet and
//! the platform-fee configuration so every quote and swap request is issued
//! on the same identity.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use solana_sdk::pubkey::Pubkey;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

use super::quote::{QuoteRequest, QuoteResponse, Route};
use super::swap::{SwapRequest, SwapTransactions};

#[derive(Debug, Error)]
pub enum JupiterError {
    #[error("API request failed: {0}")]
    ApiError(String),
    #[error("No route found for the requested swap")]
    NoRouteFound,
    #[error("Failed to decode swap transaction: {0}")]
    DecodeError(String),
}

/// Jupiter client configuration.
#[derive(Debug, Clone)]
pub struct JupiterConfig {
    /// Base URL for the aggregator API
    pub api_base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Acting wallet, signs and pays for every swap transaction
    pub user_public_key: Pubkey,
    /// Platform fee charged on each swap, in basis points
    pub platform_fee_bps: u16,
    /// Fee-collection token account per mint
    pub fee_accounts: HashMap<Pubkey, Pubkey>,
}

impl JupiterConfig {
    pub fn new(
        user_public_key: Pubkey,
        platform_fee_bps: u16,
        fee_accounts: HashMap<Pubkey, Pubkey>,
    ) -> Self {
        Self {
            api_base_url: "https://quote-api.jup.ag/v1".to_string(),
            timeout: Duration::from_secs(30),
            user_public_key,
            platform_fee_bps,
            fee_accounts,
        }
    }
}

/// Jupiter DEX aggregator client.
#[derive(Debug, Clone)]
pub struct JupiterClient {
    config: JupiterConfig,
    http: Client,
}

impl JupiterClient {
    pub fn new(config: JupiterConfig) -> Result<Self, JupiterError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| JupiterError::ApiError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, http })
    }

    pub fn platform_fee_bps(&self) -> u16 {
        self.config.platform_fee_bps
    }

    /// Fee-collection account for swaps that output `mint`, if configured.
    pub fn fee_account_for(&self, mint: &Pubkey) -> Option<&Pubkey> {
        self.config.fee_accounts.get(mint)
    }

    /// Fetch priced routes for a swap, best route first.
    pub async fn get_routes(&self, request: &QuoteRequest) -> Result<Vec<Route>, JupiterError> {
        let url = format!("{}/quote", self.config.api_base_url);

        let mut req = self.http.get(&url).query(&[
            ("inputMint", &request.input_mint),
            ("outputMint", &request.output_mint),
            ("amount", &request.amount.to_string()),
            ("slippageBps", &request.slippage_bps.to_string()),
        ]);

        if request.only_direct_routes {
            req = req.query(&[("onlyDirectRoutes", "true")]);
        }
        if let Some(fee_bps) = request.fee_bps {
            req = req.query(&[("feeBps", fee_bps.to_string())]);
        }

        let response = req
            .send()
            .await
            .map_err(|e| JupiterError::ApiError(e.to_string()))?;

        let quote: QuoteResponse = Self::handle_response(response).await?;
        Ok(quote.data)
    }

    /// Build the executable transaction set for a chosen route. The platform
    /// fee account is looked up by the swap's output mint.
    pub async fn get_swap_transactions(
        &self,
        route: &Route,
        output_mint: &Pubkey,
    ) -> Result<SwapTransactions, JupiterError> {
        let url = format!("{}/swap", self.config.api_base_url);

        let route_value = serde_json::to_value(route)
            .map_err(|e| JupiterError::ApiError(format!("Route serialization: {}", e)))?;

        let mut request = SwapRequest::new(route_value, self.config.user_public_key.to_string());
        if let Some(fee_account) = self.fee_account_for(output_mint) {
            request = request.with_fee_account(fee_account.to_string());
        }

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| JupiterError::ApiError(e.to_string()))?;

        Self::handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, JupiterError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(JupiterError::ApiError(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| JupiterError::ApiError(format!("Response parse: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JupiterConfig {
        let mint = Pubkey::new_unique();
        let fee_account = Pubkey::new_unique();
        JupiterConfig::new(Pubkey::new_unique(), 20, HashMap::from([(mint, fee_account)]))
    }

    #[test]
    fn test_client_creation() {
        let client = JupiterClient::new(test_config()).unwrap();
        assert_eq!(client.platform_fee_bps(), 20);
    }

    #[test]
    fn test_fee_account_lookup() {
        let config = test_config();
        let (mint, fee_account) = config
            .fee_accounts
            .iter()
            .map(|(m, f)| (*m, *f))
            .next()
            .unwrap();

        let client = JupiterClient::new(config).unwrap();
        assert_eq!(client.fee_account_for(&mint), Some(&fee_account));
        assert_eq!(client.fee_account_for(&Pubkey::new_unique()), None);
    }
}
