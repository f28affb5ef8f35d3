//! tokenops - Solana token-account manager and single-shot Jupiter swap CLI
//!
//! # Modules
//!
//! - `adapters`: External implementations (Solana RPC, Jupiter, CLI)
//! - `application`: Session bootstrap and command handlers
//! - `config`: Process constants (endpoints, mints, fees)
//! - `domain`: Pure logic (transaction drafting, amount planning)

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
