//! Test helper utilities for account-model blocks
//!
//! - `AccountWireBlockBuilder`: Builder for creating test account wire blocks

use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::models::{AccountWireBlock, BaseWireBlock, WireBlock};

/// Builder for creating test account-model wire blocks
pub struct AccountWireBlockBuilder {
	block: AccountWireBlock,
}

impl Default for AccountWireBlockBuilder {
	fn default() -> Self {
		let time = Utc
			.timestamp_opt(1680907463, 0)
			.single()
			.unwrap_or(DateTime::UNIX_EPOCH);

		Self {
			block: AccountWireBlock {
				base: BaseWireBlock {
					height: 17000000,
					nonce: 0,
					size: 63017,
					confirmations: 12,
					hash: "0x2ab3de1b1b1fae5a2d4e7a1e0b1b2bcd0e0e9f3a3b0b5e8c0d7c6e8b9a2f1e3d"
						.to_string(),
					next_block_hash: String::new(),
					previous_block_hash:
						"0x8a9c2b6d4e1f3a5b7c9d0e2f4a6b8c0d1e3f5a7b9c0d2e4f6a8b0c1d3e5f7a9b"
							.to_string(),
					transaction_count: 150,
					reward: 0.0412,
					mined_by: "0x95222290dd7278aa3ddd389cc1e1d165cc4bafe5".to_string(),
					time,
					time_normalized: time,
				},
				difficulty: 0.0,
				total_difficulty: 5.875e22,
				gas_used: 14250000,
				gas_limit: 30000000,
			},
		}
	}
}

impl AccountWireBlockBuilder {
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

	pub fn transaction_count(mut self, count: u64) -> Self {
		self.block.base.transaction_count = count;
		self
	}

	pub fn time(mut self, time: DateTime<Utc>) -> Self {
		self.block.base.time = time;
		self.block.base.time_normalized = time;
		self
	}

	pub fn gas(mut self, gas_used: u64, gas_limit: u64) -> Self {
		self.block.gas_used = gas_used;
		self.block.gas_limit = gas_limit;
		self
	}

	pub fn total_difficulty(mut self, total_difficulty: f64) -> Self {
		self.block.total_difficulty = total_difficulty;
		self
	}

	pub fn build(self) -> AccountWireBlock {
		self.block
	}

	pub fn build_wire(self) -> WireBlock {
		WireBlock::Account(Box::new(self.block))
	}

	/// The record as the indexer serves it
	pub fn build_json(self) -> Value {
		serde_json::to_value(&self.block).unwrap_or(Value::Null)
	}
}
