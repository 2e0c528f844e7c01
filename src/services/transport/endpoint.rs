use crate::{
	models::{ApiConfig, ChainNetwork},
	services::transport::EndpointResolver,
};

/// Resolves `{url_prefix}/{chain}/{network}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpointResolver {
	url_prefix: String,
}

impl ApiEndpointResolver {
	pub fn new(url_prefix: impl Into<String>) -> Self {
		Self {
			url_prefix: url_prefix.into().trim_end_matches('/').to_string(),
		}
	}

	pub fn from_config(config: &ApiConfig) -> Self {
		Self::new(config.url_prefix.as_str())
	}

	pub fn url_prefix(&self) -> &str {
		&self.url_prefix
	}
}

impl EndpointResolver for ApiEndpointResolver {
	fn url_for(&self, chain_network: &ChainNetwork) -> String {
		format!(
			"{}/{}/{}",
			self.url_prefix, chain_network.chain, chain_network.network
		)
	}
}
