//! Conversion of wire block records into view blocks.
//!
//! The common fields are mapped once by [`to_base_view_block`]; each family mapper
//! then adds its own fields. Apart from difficulty decoding, mapping cannot fail:
//! layout problems are rejected earlier, when JSON is decoded into a [`WireBlock`].

use chrono::{DateTime, Utc};

use crate::{
	models::{
		AccountViewBlock, AccountWireBlock, BaseViewBlock, BaseWireBlock, PoolInfo,
		TransactionSummary, UtxoViewBlock, UtxoWireBlock, ViewBlock, WireBlock,
	},
	services::blocks::difficulty::{decode_difficulty, DecodeError},
};

/// Maps a record of either family into its view.
pub fn to_view_block(wire: &WireBlock) -> Result<ViewBlock, DecodeError> {
	match wire {
		WireBlock::Utxo(block) => Ok(ViewBlock::Utxo(Box::new(to_utxo_view_block(block)?))),
		WireBlock::Account(block) => Ok(ViewBlock::Account(Box::new(to_account_view_block(
			block,
		)))),
	}
}

/// Maps a UTXO record, re-deriving difficulty from its compact bits.
///
/// # Errors
/// [`DecodeError::ZeroBits`] when the record's `bits` is zero.
pub fn to_utxo_view_block(wire: &UtxoWireBlock) -> Result<UtxoViewBlock, DecodeError> {
	Ok(UtxoViewBlock {
		base: to_base_view_block(&wire.base),
		difficulty: decode_difficulty(wire.bits)?,
		merkle_root: wire.merkle_root.clone(),
		bits: format!("{:x}", wire.bits),
		version: wire.version,
	})
}

pub fn to_account_view_block(wire: &AccountWireBlock) -> AccountViewBlock {
	AccountViewBlock {
		base: to_base_view_block(&wire.base),
		gas_limit: wire.gas_limit,
		gas_used: wire.gas_used,
		difficulty: wire.difficulty,
		total_difficulty: wire.total_difficulty,
	}
}

pub fn to_base_view_block(wire: &BaseWireBlock) -> BaseViewBlock {
	BaseViewBlock {
		height: wire.height,
		nonce: wire.nonce,
		size: wire.size,
		confirmations: wire.confirmations,
		virtual_size: wire.size,
		hash: wire.hash.clone(),
		time: epoch_seconds(&wire.time),
		transaction_summary: TransactionSummary {
			length: wire.transaction_count,
		},
		txlength: wire.transaction_count,
		previous_block_hash: wire.previous_block_hash.clone(),
		next_block_hash: wire.next_block_hash.clone(),
		pool_info: PoolInfo {
			pool_name: wire.mined_by.clone(),
			url: String::new(),
		},
		reward: wire.reward,
	}
}

/// Whole seconds since the epoch, rounded down. Pre-epoch instants clamp to zero.
fn epoch_seconds(time: &DateTime<Utc>) -> u64 {
	u64::try_from(time.timestamp()).unwrap_or(0)
}
