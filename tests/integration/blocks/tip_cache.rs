use mockall::{predicate::eq, Sequence};
use std::sync::Arc;

use block_view_provider::{
	models::ChainNetwork,
	utils::tests::{AccountWireBlockBuilder, UtxoWireBlockBuilder},
};

use crate::integration::mocks::{create_test_provider, network_error, MockHttpClient, MockUserNotifier};

const BTC_TIP: &str = "http://localhost:8100/api/BTC/mainnet/block/tip";
const ETH_TIP: &str = "http://localhost:8100/api/ETH/mainnet/block/tip";

#[tokio::test]
async fn test_concurrent_callers_share_one_request() {
	let mut http = MockHttpClient::new();
	http.expect_get()
		.with(eq(BTC_TIP))
		.times(1)
		.returning(|_| Ok(UtxoWireBlockBuilder::new().height(840_000).build_json()));

	let provider = create_test_provider(http, MockUserNotifier::new());
	let btc = ChainNetwork::new("BTC", "mainnet");

	let first = provider.get_current_height(&btc).await;
	let second = provider.get_current_height(&btc).await;

	let (a, b) = tokio::join!(first, second);

	let a = a.unwrap();
	assert_eq!(a.height(), 840_000);
	assert_eq!(a, b.unwrap());
}

#[tokio::test]
async fn test_alternating_chain_networks_issue_a_request_each() {
	let mut seq = Sequence::new();
	let mut http = MockHttpClient::new();
	http.expect_get()
		.with(eq(BTC_TIP))
		.times(1)
		.in_sequence(&mut seq)
		.returning(|_| Ok(UtxoWireBlockBuilder::new().height(1).build_json()));
	http.expect_get()
		.with(eq(ETH_TIP))
		.times(1)
		.in_sequence(&mut seq)
		.returning(|_| Ok(AccountWireBlockBuilder::new().height(2).build_json()));
	http.expect_get()
		.with(eq(BTC_TIP))
		.times(1)
		.in_sequence(&mut seq)
		.returning(|_| Ok(UtxoWireBlockBuilder::new().height(3).build_json()));

	let provider = create_test_provider(http, MockUserNotifier::new());
	let btc = ChainNetwork::new("BTC", "mainnet");
	let eth = ChainNetwork::new("ETH", "mainnet");

	let heights = vec![
		provider.get_current_height(&btc).await.await.unwrap().height(),
		provider.get_current_height(&eth).await.await.unwrap().height(),
		provider.get_current_height(&btc).await.await.unwrap().height(),
	];

	assert_eq!(heights, vec![1, 2, 3]);
	assert_eq!(provider.tip_cache().last_chain_network().await, Some(btc));
}

#[tokio::test]
async fn test_failed_tip_is_shared_and_kept() {
	let mut http = MockHttpClient::new();
	http.expect_get()
		.with(eq(BTC_TIP))
		.times(1)
		.returning(|_| Err(network_error()));

	let provider = create_test_provider(http, MockUserNotifier::new());
	let btc = ChainNetwork::new("BTC", "mainnet");

	let first = provider.get_current_height(&btc).await.await.unwrap_err();
	let second = provider.get_current_height(&btc).await.await.unwrap_err();

	assert!(Arc::ptr_eq(&first, &second));
	assert!(first.transport_source().is_some());
}

#[tokio::test]
async fn test_request_current_height_bypasses_cache() {
	let mut http = MockHttpClient::new();
	http.expect_get()
		.with(eq(BTC_TIP))
		.times(2)
		.returning(|_| Ok(UtxoWireBlockBuilder::new().build_json()));

	let provider = create_test_provider(http, MockUserNotifier::new());
	let btc = ChainNetwork::new("BTC", "mainnet");

	provider.request_current_height(&btc).await.unwrap();
	provider.request_current_height(&btc).await.unwrap();

	assert_eq!(provider.tip_cache().last_chain_network().await, None);
}
