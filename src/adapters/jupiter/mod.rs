//! Jupiter Adapter
//!
//! HTTP client for the Jupiter aggregator quote API: route discovery with a
//! platform fee, and construction of the executable swap transaction set.

mod client;
mod quote;
mod swap;

pub use client::{JupiterClient, JupiterConfig, JupiterError};
pub use quote::{QuoteRequest, QuoteResponse, Route};
pub use swap::{SwapRequest, SwapTransactions};
