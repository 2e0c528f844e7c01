//! Block retrieval and normalization.
//!
//! - `mapper`: wire records to view blocks
//! - `difficulty`: compact bits to a difficulty ratio
//! - `paths`: endpoint URLs
//! - `tip_cache`: single-slot shared tip request
//! - `provider`: the façade tying them to the HTTP collaborator

pub mod difficulty;
mod error;
pub mod mapper;
pub mod paths;
mod provider;
mod tip_cache;

pub use difficulty::{decode_difficulty, DecodeError};
pub use error::BlockProviderError;
pub use mapper::{to_account_view_block, to_utxo_view_block, to_view_block};
pub use provider::BlockProvider;
pub use tip_cache::{TipCache, TipHandle, TipResult};
