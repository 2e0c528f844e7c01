//! Account-model (EVM-style) chain specific block records.

mod block;

pub use block::{ViewBlock as AccountViewBlock, WireBlock as AccountWireBlock};
