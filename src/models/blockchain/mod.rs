//! Chain-family specific block models.
//!
//! Each submodule holds the wire record and the view record of one family. The sum
//! types here let the rest of the crate handle either family through one value.

use serde::Serialize;
use serde_json::Value;

use crate::models::{BaseViewBlock, BaseWireBlock, ChainFamily};

pub mod account;
pub mod utxo;

/// Block record as received from the indexer, in the layout of its chain family
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WireBlock {
	/// UTXO-model record
	///
	/// # Note
	/// Box is used here to equalize the enum variants
	Utxo(Box<utxo::UtxoWireBlock>),
	/// Account-model record
	Account(Box<account::AccountWireBlock>),
}

impl WireBlock {
	/// Decodes one indexer record using the layout of `family`.
	pub fn from_value(family: ChainFamily, value: Value) -> Result<Self, serde_json::Error> {
		Ok(match family {
			ChainFamily::Utxo => WireBlock::Utxo(Box::new(serde_json::from_value(value)?)),
			ChainFamily::Account => WireBlock::Account(Box::new(serde_json::from_value(value)?)),
		})
	}

	pub fn base(&self) -> &BaseWireBlock {
		match self {
			WireBlock::Utxo(b) => &b.base,
			WireBlock::Account(b) => &b.base,
		}
	}

	pub fn family(&self) -> ChainFamily {
		match self {
			WireBlock::Utxo(_) => ChainFamily::Utxo,
			WireBlock::Account(_) => ChainFamily::Account,
		}
	}
}

/// Normalized block handed to the rest of the application.
///
/// Serializes as one flat object: the common fields plus those of its family.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ViewBlock {
	Utxo(Box<utxo::UtxoViewBlock>),
	Account(Box<account::AccountViewBlock>),
}

impl ViewBlock {
	pub fn base(&self) -> &BaseViewBlock {
		match self {
			ViewBlock::Utxo(b) => &b.base,
			ViewBlock::Account(b) => &b.base,
		}
	}

	pub fn height(&self) -> u64 {
		self.base().height
	}

	pub fn hash(&self) -> &str {
		&self.base().hash
	}

	pub fn family(&self) -> ChainFamily {
		match self {
			ViewBlock::Utxo(_) => ChainFamily::Utxo,
			ViewBlock::Account(_) => ChainFamily::Account,
		}
	}

	pub fn as_utxo(&self) -> Option<&utxo::UtxoViewBlock> {
		match self {
			ViewBlock::Utxo(b) => Some(b),
			ViewBlock::Account(_) => None,
		}
	}

	pub fn as_account(&self) -> Option<&account::AccountViewBlock> {
		match self {
			ViewBlock::Account(b) => Some(b),
			ViewBlock::Utxo(_) => None,
		}
	}
}
