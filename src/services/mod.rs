//! Core services implementing block retrieval.
//!
//! - `blocks`: block fetching, mapping and tip caching
//! - `notification`: user-facing notifications
//! - `transport`: HTTP access to the indexing API

pub mod blocks;
pub mod notification;
pub mod transport;
