//! Fields shared by every chain family, on the wire and in the view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::deserialize_null_as_empty;

/// Common part of a block record as served by the indexing API
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseWireBlock {
	pub height: u64,
	pub nonce: u64,
	/// Size in bytes
	pub size: u64,
	pub confirmations: u64,
	/// Chain-native block identifier
	pub hash: String,
	/// Empty when the block is the tip
	#[serde(default, deserialize_with = "deserialize_null_as_empty")]
	pub next_block_hash: String,
	/// Empty for the genesis block
	#[serde(default, deserialize_with = "deserialize_null_as_empty")]
	pub previous_block_hash: String,
	pub transaction_count: u64,
	pub reward: f64,
	/// Pool or miner tag, empty when unknown
	#[serde(default, deserialize_with = "deserialize_null_as_empty")]
	pub mined_by: String,
	pub time: DateTime<Utc>,
	pub time_normalized: DateTime<Utc>,
}

/// Transaction count, exposed the way block views have always carried it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransactionSummary {
	pub length: u64,
}

/// Mining pool attribution. `url` is filled in by whoever knows the pool list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolInfo {
	pub pool_name: String,
	pub url: String,
}

/// Chain-agnostic block view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseViewBlock {
	pub height: u64,
	pub nonce: u64,
	pub size: u64,
	pub confirmations: u64,
	/// Same as `size`; weight is not computed at this layer
	pub virtual_size: u64,
	pub hash: String,
	/// Whole seconds since the Unix epoch
	pub time: u64,
	#[serde(rename = "tx")]
	pub transaction_summary: TransactionSummary,
	/// Always equal to `transaction_summary.length`
	pub txlength: u64,
	#[serde(rename = "previousblockhash")]
	pub previous_block_hash: String,
	#[serde(rename = "nextblockhash")]
	pub next_block_hash: String,
	pub pool_info: PoolInfo,
	pub reward: f64,
}

