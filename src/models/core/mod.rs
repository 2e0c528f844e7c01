//! Core domain models shared by every chain family.
//!
//! - Chain networks: which chain and network a request targets
//! - Blocks: the common wire and view block fields

mod block;
mod chain_network;

pub use block::{BaseViewBlock, BaseWireBlock, PoolInfo, TransactionSummary};
pub use chain_network::{ChainFamily, ChainNetwork};
