//! HTTP transport for the indexing API.
//!
//! A thin GET-and-decode client over `reqwest`, wrapped in `reqwest-middleware` so
//! embedders can stack their own middleware (tracing, caching) on the client.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest_middleware::ClientWithMiddleware;
use serde_json::Value;
use std::collections::HashMap;
use tracing::instrument;

use crate::{
	services::transport::{HttpFetch, TransportError},
	utils::http::{create_http_client, HttpClientConfig},
};

/// HTTP client for the indexer's REST endpoints
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct HttpTransportClient {
	client: ClientWithMiddleware,
}

impl HttpTransportClient {
	/// Creates a client with pooled connections and the given timeouts
	pub fn new(config: &HttpClientConfig) -> Result<Self, anyhow::Error> {
		let client = create_http_client(config).context("Failed to create base HTTP client")?;
		Ok(Self::with_client(client))
	}

	/// Wraps an already configured client
	pub fn with_client(client: ClientWithMiddleware) -> Self {
		Self { client }
	}
}

#[async_trait]
impl HttpFetch for HttpTransportClient {
	/// Sends a GET and decodes the body as JSON
	///
	/// # Errors
	/// * [`TransportError::Network`] when no response arrives
	/// * [`TransportError::Http`] for any non-2xx status, carrying the response body
	/// * [`TransportError::ResponseParse`] when the body is not JSON
	#[instrument(skip(self))]
	async fn get(&self, url: &str) -> Result<Value, TransportError> {
		let url_metadata = || Some(HashMap::from([("url".to_string(), url.to_string())]));

		let response = self
			.client
			.get(url)
			.header(ACCEPT, "application/json")
			.send()
			.await
			.map_err(|e| {
				TransportError::network(
					format!("Failed to send request: {}", e),
					Some(Box::new(e)),
					url_metadata(),
				)
			})?;

		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			tracing::warn!("Request to {} failed with status {}", url, status);
			return Err(TransportError::http(
				status,
				url.to_string(),
				body,
				None,
				None,
			));
		}

		response.json::<Value>().await.map_err(|e| {
			TransportError::response_parse(
				"Failed to parse JSON response",
				Some(Box::new(e)),
				url_metadata(),
			)
		})
	}
}
