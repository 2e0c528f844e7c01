use mockall::predicate::eq;
use serde_json::json;
use std::time::Duration;

use block_view_provider::{
	models::{ChainFamily, ChainNetwork},
	services::blocks::BlockProviderError,
	services::transport::TransportError,
	utils::{
		constants::LATEST_BLOCKS_ERROR_MESSAGE,
		tests::{AccountWireBlockBuilder, UtxoWireBlockBuilder},
	},
};

use crate::integration::mocks::{
	create_test_provider, network_error, MockHttpClient, MockUserNotifier,
};

fn btc_regtest() -> ChainNetwork {
	ChainNetwork::new("BTC", "regtest")
}

#[tokio::test]
async fn test_list_exhausted_retries_returns_empty_and_notifies_once() {
	let mut http = MockHttpClient::new();
	http.expect_get()
		.with(eq("http://localhost:8100/api/BTC/regtest/block?limit=5"))
		.times(4)
		.returning(|_| Err(network_error()));

	let mut notifier = MockUserNotifier::new();
	notifier
		.expect_notify()
		.withf(|message, duration| {
			message == LATEST_BLOCKS_ERROR_MESSAGE && *duration == Duration::from_millis(4000)
		})
		.times(1)
		.return_const(());

	let provider = create_test_provider(http, notifier);

	let blocks = provider.get_blocks(&btc_regtest(), Some(5)).await;

	assert!(blocks.is_empty());
}

#[tokio::test]
async fn test_try_get_blocks_reports_exhausted_retries() {
	let mut http = MockHttpClient::new();
	http.expect_get().times(4).returning(|url| {
		Err(TransportError::http(
			reqwest::StatusCode::SERVICE_UNAVAILABLE,
			url.to_string(),
			String::new(),
			None,
			None,
		))
	});

	let mut notifier = MockUserNotifier::new();
	notifier.expect_notify().never();

	let provider = create_test_provider(http, notifier);

	let error = provider
		.try_get_blocks(&btc_regtest(), None)
		.await
		.unwrap_err();

	assert!(matches!(error, BlockProviderError::TransportError(_)));
	assert_eq!(
		error.transport_source().and_then(|e| e.status_code()),
		Some(reqwest::StatusCode::SERVICE_UNAVAILABLE)
	);
	assert_eq!(error.metadata("chain_network"), Some("BTC/regtest"));
}

#[tokio::test]
async fn test_list_maps_blocks_in_order() {
	let mut http = MockHttpClient::new();
	http.expect_get()
		.with(eq("http://localhost:8100/api/BTC/regtest/block?limit=10"))
		.times(1)
		.returning(|_| {
			Ok(json!([
				UtxoWireBlockBuilder::new().height(101).build_json(),
				UtxoWireBlockBuilder::new().height(100).build_json(),
			]))
		});

	let mut notifier = MockUserNotifier::new();
	notifier.expect_notify().never();

	let provider = create_test_provider(http, notifier);

	let blocks = provider.get_blocks(&btc_regtest(), None).await;

	let heights: Vec<u64> = blocks.iter().map(|b| b.height()).collect();
	assert_eq!(heights, vec![101, 100]);
	assert_eq!(blocks[0].as_utxo().unwrap().bits, "1d00ffff");
}

#[tokio::test]
async fn test_list_swallows_decode_failures() {
	let mut http = MockHttpClient::new();
	http.expect_get()
		.times(1)
		.returning(|_| Ok(json!([UtxoWireBlockBuilder::new().bits(0).build_json()])));

	let mut notifier = MockUserNotifier::new();
	notifier.expect_notify().times(1).return_const(());

	let provider = create_test_provider(http, notifier);

	assert!(provider.get_blocks(&btc_regtest(), None).await.is_empty());
}

#[tokio::test]
async fn test_page_builds_height_paging_request() {
	let mut http = MockHttpClient::new();
	http.expect_get()
		.with(eq(
			"http://localhost:8100/api/BTC/regtest/block?since=582&limit=100&paging=height&direction=-1",
		))
		.times(1)
		.returning(|_| {
			Ok(json!([
				UtxoWireBlockBuilder::new().height(582).build_json(),
				UtxoWireBlockBuilder::new().height(581).build_json(),
			]))
		});

	let provider = create_test_provider(http, MockUserNotifier::new());

	let blocks = provider
		.page_blocks(582, Some(100), &btc_regtest())
		.await
		.unwrap();

	assert_eq!(blocks.len(), 2);
	assert_eq!(blocks[0].height(), 582);
	assert_eq!(blocks[1].height(), 581);
}

#[tokio::test]
async fn test_page_propagates_transport_failure_without_retry() {
	let mut http = MockHttpClient::new();
	http.expect_get().times(1).returning(|_| Err(network_error()));

	let mut notifier = MockUserNotifier::new();
	notifier.expect_notify().never();

	let provider = create_test_provider(http, notifier);

	let result = provider.page_blocks(582, None, &btc_regtest()).await;

	match result {
		Err(BlockProviderError::TransportError(_)) => {}
		other => panic!("Expected transport error, got {:?}", other),
	}
}

#[tokio::test]
async fn test_get_block_propagates_http_status() {
	let mut http = MockHttpClient::new();
	http.expect_get()
		.with(eq("http://localhost:8100/api/ETH/mainnet/block/0xdeadbeef"))
		.times(1)
		.returning(|url| {
			Err(TransportError::http(
				reqwest::StatusCode::NOT_FOUND,
				url.to_string(),
				"block not found".to_string(),
				None,
				None,
			))
		});

	let provider = create_test_provider(http, MockUserNotifier::new());

	let error = provider
		.get_block("0xdeadbeef", &ChainNetwork::new("ETH", "mainnet"))
		.await
		.unwrap_err();

	assert_eq!(
		error.transport_source().and_then(|e| e.status_code()),
		Some(reqwest::StatusCode::NOT_FOUND)
	);
}

#[tokio::test]
async fn test_get_block_account_family() {
	let mut http = MockHttpClient::new();
	http.expect_get()
		.times(1)
		.returning(|_| Ok(AccountWireBlockBuilder::new().gas(21_000, 30_000_000).build_json()));

	let provider = create_test_provider(http, MockUserNotifier::new());

	let block = provider
		.get_block("0x2ab3", &ChainNetwork::new("eth", "mainnet"))
		.await
		.unwrap();

	assert_eq!(block.family(), ChainFamily::Account);
	assert_eq!(block.as_account().unwrap().gas_used, 21_000);
}

#[tokio::test]
async fn test_get_block_rejects_wrong_layout() {
	let mut http = MockHttpClient::new();
	http.expect_get()
		.times(1)
		.returning(|_| Ok(json!({ "height": "not a number" })));

	let provider = create_test_provider(http, MockUserNotifier::new());

	let result = provider.get_block("abc", &btc_regtest()).await;

	assert!(matches!(result, Err(BlockProviderError::ShapeMismatch(_))));
}

#[tokio::test]
async fn test_coins_request() {
	let mut http = MockHttpClient::new();
	http.expect_get()
		.with(eq("http://localhost:8100/api/BTC/regtest/block/abc/coins/50/3"))
		.times(1)
		.returning(|_| Ok(json!({ "inputs": [], "outputs": [] })));

	let provider = create_test_provider(http, MockUserNotifier::new());

	let coins = provider
		.get_coins_for_block_hash("abc", &btc_regtest(), 50, 3)
		.await
		.unwrap();

	assert_eq!(coins, json!({ "inputs": [], "outputs": [] }));
}
