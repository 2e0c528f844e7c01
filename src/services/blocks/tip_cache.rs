//! Single-slot memo of the latest tip request.
//!
//! The slot holds the chain network it was filled for and a shared handle to the
//! request. Asking for the same chain network again returns the same handle, so
//! concurrent callers coalesce onto one request and later callers get the stored
//! result replayed. Asking for any other chain network replaces the slot; there is
//! no per-network history, so alternating between two networks refetches each time.
//!
//! A failed request stays in the slot until a different chain network is asked for.

use futures::future::{BoxFuture, FutureExt, Shared};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{
	models::{ChainNetwork, ViewBlock},
	services::blocks::BlockProviderError,
};

/// Outcome of a tip request, shareable between every holder of the handle
pub type TipResult = Result<ViewBlock, Arc<BlockProviderError>>;

/// Cloneable handle resolving to the tip. Lazy: the request runs when a holder
/// first awaits it.
pub type TipHandle = Shared<BoxFuture<'static, TipResult>>;

struct TipSlot {
	chain_network: ChainNetwork,
	handle: TipHandle,
}

#[derive(Default)]
pub struct TipCache {
	slot: Mutex<Option<TipSlot>>,
}

impl TipCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the stored handle when it was created for `chain_network`, otherwise
	/// calls `request`, stores its shared handle and returns it.
	///
	/// Check and replacement happen under one lock, so two callers racing on a cold
	/// slot still end up with a single request.
	pub async fn get_or_request<F>(&self, chain_network: &ChainNetwork, request: F) -> TipHandle
	where
		F: FnOnce() -> BoxFuture<'static, TipResult>,
	{
		let mut slot = self.slot.lock().await;

		if let Some(cached) = slot.as_ref() {
			if &cached.chain_network == chain_network {
				tracing::debug!("Tip cache hit for {}", chain_network);
				return cached.handle.clone();
			}
		}

		tracing::debug!("Tip cache miss for {}, issuing request", chain_network);
		let handle = request().shared();
		*slot = Some(TipSlot {
			chain_network: chain_network.clone(),
			handle: handle.clone(),
		});

		handle
	}

	/// Empties the slot. The next call issues a request whatever its chain network.
	pub async fn invalidate(&self) {
		*self.slot.lock().await = None;
	}

	/// Chain network the slot currently holds a handle for
	pub async fn last_chain_network(&self) -> Option<ChainNetwork> {
		self.slot
			.lock()
			.await
			.as_ref()
			.map(|cached| cached.chain_network.clone())
	}
}
