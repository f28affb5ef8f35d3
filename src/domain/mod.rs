//! Pure decision logic: transaction drafting, instruction assembly and
//! amount planning. Nothing in here touches the network.

pub mod assemble;
pub mod draft;
pub mod planner;

pub use assemble::TokenAccountInfo;
pub use draft::TxDraft;
pub use planner::SwapDirection;
