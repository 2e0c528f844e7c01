//! Collaborators the block provider reads through.
//!
//! - [`HttpFetch`]: issues a GET and returns the decoded JSON body
//! - [`EndpointResolver`]: maps a chain network to its API base URL
//!
//! Both are traits so tests and embedders can substitute their own.

mod endpoint;
mod error;
mod http;

pub use endpoint::ApiEndpointResolver;
pub use error::TransportError;
pub use http::HttpTransportClient;

use async_trait::async_trait;
use serde_json::Value;

use crate::models::ChainNetwork;

/// Read-only HTTP access to the indexing API
#[async_trait]
pub trait HttpFetch: Send + Sync {
	/// Fetches `url` and returns its JSON body.
	///
	/// Timeouts are the implementation's concern; a timed out request surfaces as
	/// [`TransportError::Network`].
	async fn get(&self, url: &str) -> Result<Value, TransportError>;
}

/// Resolves the base URL serving a chain network
pub trait EndpointResolver: Send + Sync {
	/// Base URL without a trailing slash, e.g. `https://api.bitcore.io/api/BTC/mainnet`
	fn url_for(&self, chain_network: &ChainNetwork) -> String;
}
