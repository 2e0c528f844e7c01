//! Block retrieval for one indexing API.
//!
//! [`BlockProvider`] resolves the chain network's endpoint, fetches through an
//! [`HttpFetch`] and maps every record into a [`ViewBlock`]. Only the latest-blocks
//! list retries; every other call surfaces the first failure.

use backon::{ExponentialBuilder, Retryable};
use futures::FutureExt;
use serde_json::Value;
use std::{collections::HashMap, sync::Arc, time::Duration};
use tracing::instrument;

use crate::{
	models::{ApiConfig, ChainNetwork, ViewBlock, WireBlock},
	services::{
		blocks::{
			mapper::to_view_block,
			paths::{block_url, blocks_url, coins_url, page_url, tip_url},
			tip_cache::{TipCache, TipHandle},
			BlockProviderError,
		},
		notification::Notifier,
		transport::{EndpointResolver, HttpFetch, TransportError},
	},
	utils::{
		constants::{DEFAULT_BLOCK_COUNT, LATEST_BLOCKS_ERROR_MESSAGE},
		logging::error::TraceableError,
		JitterSetting, RetryConfig,
	},
};

/// Fetches and normalizes blocks of any supported chain network.
///
/// Clones share the collaborators and the tip cache.
pub struct BlockProvider<H, R, N> {
	http: Arc<H>,
	resolver: Arc<R>,
	notifier: Arc<N>,
	tip_cache: Arc<TipCache>,
	list_retry: RetryConfig,
	notification_duration: Duration,
}

impl<H, R, N> Clone for BlockProvider<H, R, N> {
	fn clone(&self) -> Self {
		Self {
			http: self.http.clone(),
			resolver: self.resolver.clone(),
			notifier: self.notifier.clone(),
			tip_cache: self.tip_cache.clone(),
			list_retry: self.list_retry.clone(),
			notification_duration: self.notification_duration,
		}
	}
}

fn request_metadata(chain_network: &ChainNetwork, url: &str) -> Option<HashMap<String, String>> {
	Some(HashMap::from([
		("chain_network".to_string(), chain_network.to_string()),
		("url".to_string(), url.to_string()),
	]))
}

impl<H, R, N> BlockProvider<H, R, N>
where
	H: HttpFetch + 'static,
	R: EndpointResolver + 'static,
	N: Notifier + 'static,
{
	/// Creates a provider
	///
	/// # Arguments
	/// * `http` - Client issuing the GET requests
	/// * `resolver` - Maps a chain network to its base URL
	/// * `notifier` - Receives the latest-blocks failure notification
	/// * `config` - Supplies the list retry policy and notification duration
	pub fn new(http: Arc<H>, resolver: Arc<R>, notifier: Arc<N>, config: &ApiConfig) -> Self {
		Self {
			http,
			resolver,
			notifier,
			tip_cache: Arc::new(TipCache::new()),
			list_retry: config.list_retry.clone(),
			notification_duration: config.notification_duration(),
		}
	}

	pub fn tip_cache(&self) -> &TipCache {
		&self.tip_cache
	}

	/// Fetches the tip, bypassing the cache.
	#[instrument(skip(self), fields(chain_network = %chain_network))]
	pub async fn request_current_height(
		&self,
		chain_network: &ChainNetwork,
	) -> Result<ViewBlock, BlockProviderError> {
		request_tip(self.http.as_ref(), self.resolver.as_ref(), chain_network).await
	}

	/// Shared handle to the tip of `chain_network`.
	///
	/// Reuses the handle of the previous call when it was for the same chain network,
	/// otherwise starts a new request. See [`TipCache`].
	pub async fn get_current_height(&self, chain_network: &ChainNetwork) -> TipHandle {
		// The cached handle must not hold the provider, which owns the cache
		let http = self.http.clone();
		let resolver = self.resolver.clone();
		let requested = chain_network.clone();

		self.tip_cache
			.get_or_request(chain_network, move || {
				async move {
					request_tip(http.as_ref(), resolver.as_ref(), &requested)
						.await
						.map_err(Arc::new)
				}
				.boxed()
			})
			.await
	}

	/// Latest `num_blocks` blocks (10 when `None`), retrying transport failures.
	///
	/// At most `1 + list_retry.max_retries` requests are made. Decode and shape
	/// failures are not retried.
	#[instrument(skip(self), fields(chain_network = %chain_network))]
	pub async fn try_get_blocks(
		&self,
		chain_network: &ChainNetwork,
		num_blocks: Option<u32>,
	) -> Result<Vec<ViewBlock>, BlockProviderError> {
		let url = blocks_url(
			&self.resolver.url_for(chain_network),
			num_blocks.unwrap_or(DEFAULT_BLOCK_COUNT),
		);

		let operation = || async { self.http.get(&url).await };

		let backoff = ExponentialBuilder::default()
			.with_min_delay(self.list_retry.initial_backoff)
			.with_max_delay(self.list_retry.max_backoff)
			.with_factor(self.list_retry.base_for_backoff as f32)
			.with_max_times(self.list_retry.max_retries as usize);

		let backoff_with_jitter = match self.list_retry.jitter {
			JitterSetting::Full => backoff.with_jitter(),
			JitterSetting::None => backoff,
		};

		let value = operation
			.retry(backoff_with_jitter)
			.notify(|e: &TransportError, delay: Duration| {
				tracing::warn!("Retrying latest blocks request in {:?}: {}", delay, e);
			})
			.await
			.map_err(|e| transport_failure(e, chain_network, &url))?;

		decode_blocks(value, chain_network, &url)
	}

	/// Latest `num_blocks` blocks, or an empty list when they cannot be loaded.
	///
	/// On failure the notifier is told once, after retries are exhausted.
	pub async fn get_blocks(
		&self,
		chain_network: &ChainNetwork,
		num_blocks: Option<u32>,
	) -> Vec<ViewBlock> {
		match self.try_get_blocks(chain_network, num_blocks).await {
			Ok(blocks) => blocks,
			Err(e) => {
				tracing::warn!(
					chain_network = %chain_network,
					trace_id = %e.trace_id(),
					"Returning no blocks after failed latest blocks request"
				);
				self.notifier
					.notify(LATEST_BLOCKS_ERROR_MESSAGE, self.notification_duration);
				Vec::new()
			}
		}
	}

	/// `num_blocks` blocks (10 when `None`) at or below height `since`, highest first
	#[instrument(skip(self), fields(chain_network = %chain_network))]
	pub async fn page_blocks(
		&self,
		since: u64,
		num_blocks: Option<u32>,
		chain_network: &ChainNetwork,
	) -> Result<Vec<ViewBlock>, BlockProviderError> {
		let url = page_url(
			&self.resolver.url_for(chain_network),
			since,
			num_blocks.unwrap_or(DEFAULT_BLOCK_COUNT),
		);
		let value = fetch(self.http.as_ref(), &url, chain_network).await?;
		decode_blocks(value, chain_network, &url)
	}

	#[instrument(skip(self), fields(chain_network = %chain_network))]
	pub async fn get_block(
		&self,
		hash: &str,
		chain_network: &ChainNetwork,
	) -> Result<ViewBlock, BlockProviderError> {
		let url = block_url(&self.resolver.url_for(chain_network), hash);
		let value = fetch(self.http.as_ref(), &url, chain_network).await?;
		decode_block(value, chain_network, &url)
	}

	/// One page of the coins of a block, as returned by the API
	#[instrument(skip(self), fields(chain_network = %chain_network))]
	pub async fn get_coins_for_block_hash(
		&self,
		hash: &str,
		chain_network: &ChainNetwork,
		limit: u32,
		page: u32,
	) -> Result<Value, BlockProviderError> {
		let url = coins_url(&self.resolver.url_for(chain_network), hash, limit, page);
		fetch(self.http.as_ref(), &url, chain_network).await
	}
}

fn transport_failure(
	error: TransportError,
	chain_network: &ChainNetwork,
	url: &str,
) -> BlockProviderError {
	BlockProviderError::transport_error(
		format!("Failed to fetch {}", url),
		Some(Box::new(error)),
		request_metadata(chain_network, url),
	)
}

async fn fetch<H: HttpFetch + ?Sized>(
	http: &H,
	url: &str,
	chain_network: &ChainNetwork,
) -> Result<Value, BlockProviderError> {
	http.get(url)
		.await
		.map_err(|e| transport_failure(e, chain_network, url))
}

async fn request_tip<H, R>(
	http: &H,
	resolver: &R,
	chain_network: &ChainNetwork,
) -> Result<ViewBlock, BlockProviderError>
where
	H: HttpFetch + ?Sized,
	R: EndpointResolver + ?Sized,
{
	let url = tip_url(&resolver.url_for(chain_network));
	let value = fetch(http, &url, chain_network).await?;
	decode_block(value, chain_network, &url)
}

fn decode_block(
	value: Value,
	chain_network: &ChainNetwork,
	url: &str,
) -> Result<ViewBlock, BlockProviderError> {
	let wire = WireBlock::from_value(chain_network.family(), value).map_err(|e| {
		BlockProviderError::shape_mismatch(
			format!("Unexpected {:?} block layout: {}", chain_network.family(), e),
			Some(Box::new(e)),
			request_metadata(chain_network, url),
		)
	})?;

	to_view_block(&wire).map_err(|e| {
		BlockProviderError::decode_error(
			format!("Failed to map block {}: {}", wire.base().hash, e),
			Some(Box::new(e)),
			request_metadata(chain_network, url),
		)
	})
}

fn decode_blocks(
	value: Value,
	chain_network: &ChainNetwork,
	url: &str,
) -> Result<Vec<ViewBlock>, BlockProviderError> {
	match value {
		Value::Array(records) => records
			.into_iter()
			.map(|record| decode_block(record, chain_network, url))
			.collect(),
		other => Err(BlockProviderError::shape_mismatch(
			format!("Expected a JSON array of blocks, got {}", json_kind(&other)),
			None,
			request_metadata(chain_network, url),
		)),
	}
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
