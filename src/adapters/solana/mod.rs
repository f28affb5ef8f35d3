pub mod rpc;
pub mod wallet;

pub use rpc::{SolanaClient, SolanaClientError};
pub use wallet::WalletManager;
