//! UTXO-model (Bitcoin-style) chain specific block records.

mod block;

pub use block::{ViewBlock as UtxoViewBlock, WireBlock as UtxoWireBlock};
