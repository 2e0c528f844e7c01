use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::{constants::ACCOUNT_MODEL_CHAINS, normalize_string};

/// Block record layout served for a chain
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChainFamily {
	/// Bitcoin-style chains (BTC, BCH, LTC, DOGE, ...)
	Utxo,
	/// Account-model smart-contract chains (ETH and EVM siblings)
	Account,
}

impl ChainFamily {
	/// Resolves the family of a chain identifier, case-insensitively.
	pub fn from_chain(chain: &str) -> Self {
		if ACCOUNT_MODEL_CHAINS
			.iter()
			.any(|c| c.eq_ignore_ascii_case(chain))
		{
			ChainFamily::Account
		} else {
			ChainFamily::Utxo
		}
	}
}

/// A chain and network pair, e.g. `BTC/mainnet`.
///
/// Selects the remote endpoint and the wire record layout. Chains are stored upper
/// case and networks lower case so that equality matches what the indexer serves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ChainNetwork {
	pub chain: String,
	pub network: String,
}

impl ChainNetwork {
	pub fn new(chain: impl AsRef<str>, network: impl AsRef<str>) -> Self {
		Self {
			chain: chain.as_ref().trim().to_uppercase(),
			network: normalize_string(network.as_ref()),
		}
	}

	pub fn family(&self) -> ChainFamily {
		ChainFamily::from_chain(&self.chain)
	}
}

impl fmt::Display for ChainNetwork {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.chain, self.network)
	}
}
