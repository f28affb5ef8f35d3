//! External-facing adapters: CLI parsing, Solana RPC, Jupiter API.

pub mod cli;
pub mod jupiter;
pub mod solana;
