//! Configuration loading and validation.
//!
//! The adapter reads one JSON file describing where the indexing API lives and how
//! the latest-blocks request retries. Every field has a default, so a missing file
//! is not an error.

#![allow(clippy::result_large_err)]

use async_trait::async_trait;
use std::path::Path;

mod api_config;
mod error;

pub use api_config::ApiConfig;
pub use error::ConfigError;

/// Common interface for loading configuration files
#[async_trait]
pub trait ConfigLoader: Sized {
	/// Load configuration from a specific file path
	async fn load_from_path(path: &Path) -> Result<Self, ConfigError>;

	/// Returns Ok(()) if valid, or the first problem found.
	fn validate(&self) -> Result<(), ConfigError>;

	/// Logs a warning for settings that work but are unsafe.
	fn validate_protocol(&self);

	/// Check if a file is a JSON file based on extension
	fn is_json_file(path: &Path) -> bool {
		path.extension()
			.map(|ext| ext.to_string_lossy().to_lowercase() == "json")
			.unwrap_or(false)
	}
}
