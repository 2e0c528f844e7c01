use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// --- Default values for retry configuration settings ---
fn default_max_attempts() -> u32 {
	3
}

fn default_initial_backoff() -> Duration {
	Duration::from_millis(250)
}

fn default_max_backoff() -> Duration {
	Duration::from_secs(10)
}

fn default_base_for_backoff() -> u32 {
	2
}

/// Serializable setting for jitter in retry policies
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum JitterSetting {
	/// No jitter applied to the backoff duration
	None,
	/// Full jitter applied, randomizing the backoff duration
	#[default]
	Full,
}

/// Bounded retry policy for the latest-blocks request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RetryConfig {
	/// Retries after the first failed attempt
	#[serde(default = "default_max_attempts")]
	pub max_retries: u32,
	/// Base for exponential backoff calculations
	#[serde(default = "default_base_for_backoff")]
	pub base_for_backoff: u32,
	/// Delay before the first retry
	#[serde(default = "default_initial_backoff")]
	pub initial_backoff: Duration,
	/// Upper bound on any single delay
	#[serde(default = "default_max_backoff")]
	pub max_backoff: Duration,
	#[serde(default)]
	pub jitter: JitterSetting,
}

impl Default for RetryConfig {
	fn default() -> Self {
		Self {
			max_retries: default_max_attempts(),
			base_for_backoff: default_base_for_backoff(),
			initial_backoff: default_initial_backoff(),
			max_backoff: default_max_backoff(),
			jitter: JitterSetting::default(),
		}
	}
}

impl RetryConfig {
	/// Same retry budget with no delay between attempts
	pub fn immediate(max_retries: u32) -> Self {
		Self {
			max_retries,
			initial_backoff: Duration::ZERO,
			max_backoff: Duration::ZERO,
			jitter: JitterSetting::None,
			..Self::default()
		}
	}
}

/// Timeouts and pooling for the indexer HTTP client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpClientConfig {
	pub request_timeout: Duration,
	pub connect_timeout: Duration,
}

impl Default for HttpClientConfig {
	fn default() -> Self {
		Self {
			request_timeout: Duration::from_secs(30),
			connect_timeout: Duration::from_secs(20),
		}
	}
}

/// Creates the middleware-wrapped HTTP client used to talk to the indexer.
///
/// No retry middleware is installed: the only retried call (the latest-blocks list)
/// composes its own bounded retry so the attempt count stays exact.
pub fn create_http_client(
	config: &HttpClientConfig,
) -> Result<ClientWithMiddleware, reqwest::Error> {
	let base_client = reqwest::ClientBuilder::new()
		.pool_idle_timeout(Duration::from_secs(90))
		.pool_max_idle_per_host(32)
		.timeout(config.request_timeout)
		.connect_timeout(config.connect_timeout)
		.build()?;

	Ok(ClientBuilder::new(base_client).build())
}
