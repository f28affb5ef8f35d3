//! Jupiter Quote Types
//!
//! Request and response structures for the aggregator quote endpoint. Routes
//! are kept opaque beyond the amount fields: whatever else the API returns is
//! carried through untouched so the route can be posted back verbatim.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Request parameters for route discovery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    /// Input token mint address
    pub input_mint: String,
    /// Output token mint address
    pub output_mint: String,
    /// Amount in base units (lamports for SOL)
    pub amount: u64,
    /// Slippage tolerance in basis points (1 = 0.01%)
    pub slippage_bps: u16,
    /// Only use direct routes (no intermediate tokens)
    #[serde(default)]
    pub only_direct_routes: bool,
    /// Platform fee in basis points (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_bps: Option<u16>,
}

impl QuoteRequest {
    pub fn new(input_mint: String, output_mint: String, amount: u64, slippage_bps: u16) -> Self {
        Self {
            input_mint,
            output_mint,
            amount,
            slippage_bps,
            only_direct_routes: false,
            fee_bps: None,
        }
    }

    /// Restrict the search to single-hop routes.
    pub fn with_direct_routes(mut self, direct: bool) -> Self {
        self.only_direct_routes = direct;
        self
    }

    /// Charge a platform fee on the swap.
    pub fn with_platform_fee(mut self, fee_bps: u16) -> Self {
        self.fee_bps = Some(fee_bps);
        self
    }
}

/// One priced route. Only the amount fields are interpreted; everything else
/// (market infos, price impact, slippage data) rides along in `extra` so the
/// route round-trips to the swap endpoint unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Input amount in base units
    pub in_amount: u64,
    /// Output amount in base units
    pub out_amount: u64,
    /// Catch-all for the remaining route fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Response from the quote endpoint: priced routes, best first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub data: Vec<Route>,
    #[serde(default)]
    pub time_taken: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_request_new() {
        let req = QuoteRequest::new(
            "So11111111111111111111111111111111111111112".to_string(),
            "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v".to_string(),
            1_000_000_000,
            50,
        );

        assert_eq!(req.amount, 1_000_000_000);
        assert_eq!(req.slippage_bps, 50);
        assert!(!req.only_direct_routes);
        assert!(req.fee_bps.is_none());
    }

    #[test]
    fn test_quote_request_builder() {
        let req = QuoteRequest::new("SOL".to_string(), "USDC".to_string(), 1_000_000, 100)
            .with_direct_routes(true)
            .with_platform_fee(20);

        assert!(req.only_direct_routes);
        assert_eq!(req.fee_bps, Some(20));
    }

    #[test]
    fn test_quote_response_parsing() {
        let json = r#"{
            "data": [
                {
                    "inAmount": 1600000000,
                    "outAmount": 240000000,
                    "outAmountWithSlippage": 238800000,
                    "priceImpactPct": 0.002,
                    "marketInfos": [{"label": "Orca"}]
                },
                {
                    "inAmount": 1600000000,
                    "outAmount": 239000000
                }
            ],
            "timeTaken": 0.05
        }"#;

        let quote: QuoteResponse = serde_json::from_str(json).unwrap();
        assert_eq!(quote.data.len(), 2);

        let best = &quote.data[0];
        assert_eq!(best.in_amount, 1_600_000_000);
        assert_eq!(best.out_amount, 240_000_000);
        assert!(best.extra.contains_key("marketInfos"));
    }

    #[test]
    fn test_route_round_trips_opaque_fields() {
        let json = r#"{
            "inAmount": 500,
            "outAmount": 400,
            "marketInfos": [{"label": "Raydium", "lpFee": {"amount": 2}}],
            "fees": {"signatureFee": 5000}
        }"#;

        let route: Route = serde_json::from_str(json).unwrap();
        let out = serde_json::to_value(&route).unwrap();

        assert_eq!(out["inAmount"], 500);
        assert_eq!(out["marketInfos"][0]["label"], "Raydium");
        assert_eq!(out["fees"]["signatureFee"], 5000);
    }
}
