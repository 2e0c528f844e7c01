//! Compact difficulty ("bits") decoding for UTXO-model chains.

use thiserror::Error;

use crate::utils::constants::GENESIS_COMPACT_BITS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
	/// A zero target has no difficulty ratio
	#[error("compact difficulty bits must be non-zero")]
	ZeroBits,
}

/// Ratio of the genesis compact target to `bits`.
///
/// Both operands are the compact integers themselves, not expanded targets, which
/// matches what block explorers built on the same indexer display.
///
/// # Errors
/// [`DecodeError::ZeroBits`] when `bits` is zero.
pub fn decode_difficulty(bits: u32) -> Result<f64, DecodeError> {
	if bits == 0 {
		return Err(DecodeError::ZeroBits);
	}

	Ok(f64::from(GENESIS_COMPACT_BITS) / f64::from(bits))
}
