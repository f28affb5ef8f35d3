//! Process constants.
//!
//! This tool is deliberately config-file free: endpoints, key paths and fee
//! parameters are fixed at compile time.

use solana_sdk::pubkey::Pubkey;

/// RPC endpoint used for every chain read and submission.
pub const RPC_URL: &str = "https://api.mainnet-beta.solana.com";

/// Cluster name, printed alongside addresses for operator sanity.
pub const CLUSTER: &str = "mainnet-beta";

/// Keypair file for the acting wallet (JSON array of secret-key bytes).
pub const USER_KEYPAIR_PATH: &str = "keys/user.json";

/// Keypair file for the platform-fee collector wallet.
pub const COLLECTOR_KEYPAIR_PATH: &str = "keys/collector.json";

/// Wrapped SOL mint.
pub const WSOL_MINT: Pubkey = solana_sdk::pubkey!("So11111111111111111111111111111111111111112");

/// USDC mint.
pub const USDC_MINT: Pubkey = solana_sdk::pubkey!("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v");

/// Slippage tolerance for swaps, in basis points.
pub const SLIPPAGE_BPS: u16 = 50;

/// Platform fee withheld on swaps, in basis points, routed to the
/// collector's token accounts.
pub const PLATFORM_FEE_BPS: u16 = 20;

/// Flat network fee per transaction signature, in lamports.
pub const FEE_PER_SIGNATURE: u64 = 5_000;

/// Confirmation polling bounds: attempts x interval.
pub const CONFIRM_MAX_ATTEMPTS: u32 = 30;
pub const CONFIRM_POLL_MILLIS: u64 = 2_000;
