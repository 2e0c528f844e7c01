//! UTXO block data structures.

use serde::{Deserialize, Serialize};
use std::ops::Deref;

use crate::models::{BaseViewBlock, BaseWireBlock};

/// Block record for UTXO-model chains as served by the indexer
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireBlock {
	#[serde(flatten)]
	pub base: BaseWireBlock,
	/// Difficulty as computed upstream; the view re-derives it from `bits`
	#[serde(default)]
	pub difficulty: f64,
	pub merkle_root: String,
	/// Compact-encoded difficulty target
	pub bits: u32,
	pub version: i64,
}

impl Deref for WireBlock {
	type Target = BaseWireBlock;

	fn deref(&self) -> &Self::Target {
		&self.base
	}
}

/// Normalized UTXO block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewBlock {
	#[serde(flatten)]
	pub base: BaseViewBlock,
	pub difficulty: f64,
	#[serde(rename = "merkleroot")]
	pub merkle_root: String,
	/// Lowercase hex of the compact target, without a `0x` prefix
	pub bits: String,
	pub version: i64,
}

impl Deref for ViewBlock {
	type Target = BaseViewBlock;

	fn deref(&self) -> &Self::Target {
		&self.base
	}
}
