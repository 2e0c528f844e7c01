//! Request URLs for the block endpoints of the indexing API.
//!
//! Each function takes the chain network's base URL as returned by an
//! [`EndpointResolver`](crate::services::transport::EndpointResolver).

/// Latest block
pub fn tip_url(base: &str) -> String {
	format!("{}/block/tip", base)
}

/// The `limit` most recent blocks
pub fn blocks_url(base: &str, limit: u32) -> String {
	format!("{}/block?limit={}", base, limit)
}

/// `limit` blocks paged by height, descending from `since`
pub fn page_url(base: &str, since: u64, limit: u32) -> String {
	format!(
		"{}/block?since={}&limit={}&paging=height&direction=-1",
		base, since, limit
	)
}

pub fn block_url(base: &str, hash: &str) -> String {
	format!("{}/block/{}", base, urlencoding::encode(hash))
}

/// One page of the coins (transaction outputs) of a block
pub fn coins_url(base: &str, hash: &str, limit: u32, page: u32) -> String {
	format!(
		"{}/block/{}/coins/{}/{}",
		base,
		urlencoding::encode(hash),
		limit,
		page
	)
}
