//! Test helper utilities for UTXO-model blocks
//!
//! - `UtxoWireBlockBuilder`: Builder for creating test UTXO wire blocks

use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::models::{BaseWireBlock, UtxoWireBlock, WireBlock};

/// Builder for creating test UTXO wire blocks. Defaults to the Bitcoin block at
/// height 100.
pub struct UtxoWireBlockBuilder {
	block: UtxoWireBlock,
}

impl Default for UtxoWireBlockBuilder {
	fn default() -> Self {
		let time = Utc
			.timestamp_opt(1231660825, 0)
			.single()
			.unwrap_or(DateTime::UNIX_EPOCH);

		Self {
			block: UtxoWireBlock {
				base: BaseWireBlock {
					height: 100,
					nonce: 2083236893,
					size: 215,
					confirmations: 1,
					hash: "000000007bc154e0fa7ea32218a72fe2c1bb9f86cf8c9ebf9a715ed27fdb229a"
						.to_string(),
					next_block_hash: String::new(),
					previous_block_hash:
						"00000000dfd5d65c9d8561b4b8f60a63018fe3933ecb131fb37f905f87da951a"
							.to_string(),
					transaction_count: 1,
					reward: 5000000000.0,
					mined_by: String::new(),
					time,
					time_normalized: time,
				},
				difficulty: 1.0,
				merkle_root: "2d05f0c9c3e1c226e63b5fac240137687544cf631cd616fd34fd188fc9020866"
					.to_string(),
				bits: 0x1d00ffff,
				version: 1,
			},
		}
	}
}

impl UtxoWireBlockBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn height(mut self, height: u64) -> Self {
		self.block.base.height = height;
		self
	}

	pub fn hash(mut self, hash: &str) -> Self {
		self.block.base.hash = hash.to_string();
		self
	}

	pub fn size(mut self, size: u64) -> Self {
		self.block.base.size = size;
		self
	}

	pub fn transaction_count(mut self, count: u64) -> Self {
		self.block.base.transaction_count = count;
		self
	}

	pub fn mined_by(mut self, mined_by: &str) -> Self {
		self.block.base.mined_by = mined_by.to_string();
		self
	}

	pub fn next_block_hash(mut self, hash: &str) -> Self {
		self.block.base.next_block_hash = hash.to_string();
		self
	}

	pub fn time(mut self, time: DateTime<Utc>) -> Self {
		self.block.base.time = time;
		self.block.base.time_normalized = time;
		self
	}

	pub fn bits(mut self, bits: u32) -> Self {
		self.block.bits = bits;
		self
	}

	pub fn version(mut self, version: i64) -> Self {
		self.block.version = version;
		self
	}

	pub fn build(self) -> UtxoWireBlock {
		self.block
	}

	pub fn build_wire(self) -> WireBlock {
		WireBlock::Utxo(Box::new(self.block))
	}

	/// The record as the indexer serves it
	pub fn build_json(self) -> Value {
		serde_json::to_value(&self.block).unwrap_or(Value::Null)
	}
}
