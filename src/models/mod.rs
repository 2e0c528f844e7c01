//! Domain models and data structures for block retrieval.
//!
//! - `blockchain`: Chain-family specific wire and view blocks (UTXO, account)
//! - `config`: Configuration loading and validation
//! - `core`: Chain networks and the fields common to every block

mod blockchain;
mod config;
mod core;

// Re-export blockchain types
pub use blockchain::{
	account::{AccountViewBlock, AccountWireBlock},
	utxo::{UtxoViewBlock, UtxoWireBlock},
	ViewBlock, WireBlock,
};

// Re-export core types
pub use core::{BaseViewBlock, BaseWireBlock, ChainFamily, ChainNetwork, PoolInfo, TransactionSummary};

// Re-export config types
pub use config::{ApiConfig, ConfigError, ConfigLoader};
