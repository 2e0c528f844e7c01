//! Block view provider.
//!
//! Fetches blocks from a remote indexing API and normalizes them into one
//! chain-agnostic view shape. It includes:
//!
//! - Mapping of UTXO-model and account-model block records into view blocks
//! - Compact difficulty decoding
//! - A shared, single-slot cache for the chain tip
//! - A retrieval façade with a bounded, notifying retry for the latest blocks
//!
//! # Module Structure
//!
//! - `models`: Chain networks, wire and view blocks, configuration
//! - `services`: Block retrieval, transport and notification
//! - `utils`: Common utilities and helper functions

pub mod models;
pub mod services;
pub mod utils;
