//! Account-model block data structures.

use serde::{Deserialize, Serialize};
use std::ops::Deref;

use crate::models::{BaseViewBlock, BaseWireBlock};

/// Block record for account-model chains as served by the indexer
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireBlock {
	#[serde(flatten)]
	pub base: BaseWireBlock,
	pub difficulty: f64,
	pub total_difficulty: f64,
	pub gas_used: u64,
	pub gas_limit: u64,
}

impl Deref for WireBlock {
	type Target = BaseWireBlock;

	fn deref(&self) -> &Self::Target {
		&self.base
	}
}

/// Normalized account-model block
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewBlock {
	#[serde(flatten)]
	pub base: BaseViewBlock,
	pub gas_limit: u64,
	pub gas_used: u64,
	pub difficulty: f64,
	pub total_difficulty: f64,
}

impl Deref for ViewBlock {
	type Target = BaseViewBlock;

	fn deref(&self) -> &Self::Target {
		&self.base
	}
}
