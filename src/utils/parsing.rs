//! Parsing utilities
//!
//! Helpers for normalizing identifiers and for lenient decoding of indexer JSON.

use serde::{Deserialize, Deserializer};

/// Trims whitespace and lower-cases the input.
pub fn normalize_string(input: &str) -> String {
	input.trim().to_lowercase()
}

/// Deserializes an optional string field, mapping `null` to the empty string.
///
/// The indexer sends `null` (or omits the field) for a missing neighbour hash or an
/// unknown miner; combine with `#[serde(default)]` to also cover the omitted case.
pub fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
