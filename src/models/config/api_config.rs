//! Indexing API configuration.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, path::Path, time::Duration};
use url::Url;

use crate::{
	models::{config::error::ConfigError, ConfigLoader},
	utils::{
		constants::{
			API_URL_PREFIX_ENV, DEFAULT_API_URL_PREFIX, LATEST_BLOCKS_ERROR_DURATION_MS,
		},
		HttpClientConfig, RetryConfig,
	},
};

fn default_url_prefix() -> String {
	DEFAULT_API_URL_PREFIX.to_string()
}

fn default_request_timeout_ms() -> u64 {
	30_000
}

fn default_connect_timeout_ms() -> u64 {
	20_000
}

fn default_notification_duration_ms() -> u64 {
	LATEST_BLOCKS_ERROR_DURATION_MS
}

/// Where the indexing API lives and how requests to it behave
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
	/// Base URL; a chain network's endpoint is `{url_prefix}/{chain}/{network}`
	#[serde(default = "default_url_prefix")]
	pub url_prefix: String,

	/// Bounded retry applied to the latest-blocks request only
	#[serde(default)]
	pub list_retry: RetryConfig,

	#[serde(default = "default_request_timeout_ms")]
	pub request_timeout_ms: u64,

	#[serde(default = "default_connect_timeout_ms")]
	pub connect_timeout_ms: u64,

	/// How long the latest-blocks failure notification is shown
	#[serde(default = "default_notification_duration_ms")]
	pub notification_duration_ms: u64,
}

impl Default for ApiConfig {
	fn default() -> Self {
		Self {
			url_prefix: default_url_prefix(),
			list_retry: RetryConfig::default(),
			request_timeout_ms: default_request_timeout_ms(),
			connect_timeout_ms: default_connect_timeout_ms(),
			notification_duration_ms: default_notification_duration_ms(),
		}
	}
}

impl ApiConfig {
	/// Loads `path` when it exists, falls back to defaults otherwise, then applies
	/// environment overrides and validates the result.
	pub async fn load(path: &Path) -> Result<Self, ConfigError> {
		let config = if path.exists() {
			Self::load_from_path(path).await?
		} else {
			tracing::info!(
				"No API config at {}, using defaults",
				path.display()
			);
			Self::default()
		};

		let config = config.with_url_prefix_override(std::env::var(API_URL_PREFIX_ENV).ok());
		config.validate()?;
		config.validate_protocol();
		Ok(config)
	}

	/// Replaces `url_prefix` when an override is given and non-empty.
	pub fn with_url_prefix_override(mut self, url_prefix: Option<String>) -> Self {
		if let Some(prefix) = url_prefix.filter(|p| !p.trim().is_empty()) {
			self.url_prefix = prefix.trim().to_string();
		}
		self
	}

	pub fn http_client_config(&self) -> HttpClientConfig {
		HttpClientConfig {
			request_timeout: Duration::from_millis(self.request_timeout_ms),
			connect_timeout: Duration::from_millis(self.connect_timeout_ms),
		}
	}

	pub fn notification_duration(&self) -> Duration {
		Duration::from_millis(self.notification_duration_ms)
	}
}

#[async_trait]
impl ConfigLoader for ApiConfig {
	async fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
		let metadata = || {
			Some(HashMap::from([(
				"path".to_string(),
				path.display().to_string(),
			)]))
		};

		if !Self::is_json_file(path) {
			return Err(ConfigError::file_error(
				"API config must be a .json file",
				None,
				metadata(),
			));
		}

		let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
			ConfigError::file_error(
				format!("failed to read API config file: {}", e),
				Some(Box::new(e)),
				metadata(),
			)
		})?;

		serde_json::from_str(&contents).map_err(|e| {
			ConfigError::parse_error(
				format!("failed to parse API config: {}", e),
				Some(Box::new(e)),
				metadata(),
			)
		})
	}

	/// Ensures that:
	/// - `url_prefix` is an absolute http(s) URL
	/// - both timeouts are non-zero
	fn validate(&self) -> Result<(), ConfigError> {
		let url = Url::parse(&self.url_prefix).map_err(|e| {
			ConfigError::validation_error(
				format!("Invalid url_prefix: {}", e),
				Some(Box::new(e)),
				Some(HashMap::from([(
					"url_prefix".to_string(),
					self.url_prefix.clone(),
				)])),
			)
		})?;

		if !matches!(url.scheme(), "http" | "https") {
			return Err(ConfigError::validation_error(
				"url_prefix must use http or https",
				None,
				Some(HashMap::from([(
					"url_prefix".to_string(),
					self.url_prefix.clone(),
				)])),
			));
		}

		if self.request_timeout_ms == 0 || self.connect_timeout_ms == 0 {
			return Err(ConfigError::validation_error(
				"Request and connect timeouts must be greater than zero",
				None,
				None,
			));
		}

		Ok(())
	}

	fn validate_protocol(&self) {
		if self.url_prefix.starts_with("http://") {
			tracing::warn!(
				"API url_prefix uses an insecure protocol: {}",
				self.url_prefix
			);
		}
	}
}
