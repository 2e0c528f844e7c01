use block_view_provider::{
	services::blocks::{to_account_view_block, to_utxo_view_block, to_view_block},
	utils::tests::UtxoWireBlockBuilder,
};
use proptest::prelude::*;

use crate::properties::strategies::{
	account_wire_block_strategy, instant_strategy, nonzero_bits_strategy,
	utxo_wire_block_strategy,
};

proptest! {
	#[test]
	fn test_utxo_transaction_count_stays_in_sync(wire in utxo_wire_block_strategy()) {
		let view = to_utxo_view_block(&wire).unwrap();

		prop_assert_eq!(view.transaction_summary.length, view.txlength);
		prop_assert_eq!(view.txlength, wire.transaction_count);
		prop_assert_eq!(view.virtual_size, wire.size);
		prop_assert_eq!(view.pool_info.url.as_str(), "");
	}

	#[test]
	fn test_account_transaction_count_stays_in_sync(wire in account_wire_block_strategy()) {
		let view = to_account_view_block(&wire);

		prop_assert_eq!(view.transaction_summary.length, view.txlength);
		prop_assert_eq!(view.gas_used, wire.gas_used);
		prop_assert_eq!(view.total_difficulty, wire.total_difficulty);
	}

	#[test]
	fn test_time_is_floored_seconds((millis, time) in instant_strategy()) {
		let wire = UtxoWireBlockBuilder::new().time(time).build_wire();
		let view = to_view_block(&wire).unwrap();

		prop_assert_eq!(view.base().time, (millis / 1000) as u64);
	}

	#[test]
	fn test_bits_is_lowercase_hex_of_value(bits in nonzero_bits_strategy()) {
		let wire = UtxoWireBlockBuilder::new().bits(bits).build();
		let view = to_utxo_view_block(&wire).unwrap();

		prop_assert!(!view.bits.starts_with("0x"));
		prop_assert!(view.bits.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
		prop_assert_eq!(u32::from_str_radix(&view.bits, 16).unwrap(), bits);
	}

	#[test]
	fn test_view_json_keeps_fields(wire in utxo_wire_block_strategy()) {
		let view = to_utxo_view_block(&wire).unwrap();
		let value = serde_json::to_value(&view).unwrap();

		prop_assert_eq!(value["tx"]["length"].as_u64(), Some(wire.transaction_count));
		prop_assert_eq!(value["txlength"].as_u64(), Some(wire.transaction_count));
		prop_assert_eq!(value["hash"].as_str(), Some(wire.hash.as_str()));
	}
}
