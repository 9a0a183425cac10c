use std::{
	sync::Arc,
	time::Duration,
};

use dcn_primitives::types::{
	Address,
	U256,
};

use super::mock::{
	closing_feed,
	connection_reset,
	feed,
	log,
	registry,
	registry_address,
	transfer_log,
	MockTransport,
};
use crate::{
	contracts::ContractIdentifier,
	errors::ContractError,
	events::{
		ContractEvent,
		Transfer,
	},
	iterator::LogIterator,
	subscription::LogSubscription,
	transport::FilterOptions,
};

fn transfer_event() -> &'static ethabi::Event {
	ContractIdentifier::DcnRegistry
		.abi()
		.expect("ABI should load")
		.event(Transfer::NAME)
		.expect("Transfer is declared")
}

fn mint(token_id: u64) -> web3::types::Log {
	transfer_log(registry_address(), Address::zero(), Address::repeat_byte(0x11), token_id.into())
}

#[tokio::test]
async fn test_iterator_yields_every_log_then_exhausts() {
	let transport = Arc::new(MockTransport::default());
	*transport.logs.lock() = vec![mint(1), mint(2), mint(3)];

	let registry = registry(&transport);
	let mut iterator = registry
		.filter_transfer(vec![], vec![], vec![], FilterOptions::default())
		.await
		.expect("filter should succeed");

	let mut token_ids = vec![];
	while iterator.next().await {
		let event = iterator.take_event().expect("next returned true");
		assert_eq!(event.from, Address::zero());
		token_ids.push(event.token_id);
	}
	assert_eq!(token_ids, vec![U256::from(1), U256::from(2), U256::from(3)]);
	assert!(iterator.error().is_none());
	assert!(iterator.subscription_error().is_none());
	assert!(!iterator.next().await);
}

#[tokio::test]
async fn test_iterator_drains_buffer_after_subscription_error() {
	let (subscription, mut control) = feed(8);
	control.logs.send(mint(1)).await.expect("feed is open");
	control.logs.send(mint(2)).await.expect("feed is open");
	control.fail(connection_reset());
	// Let the feed report its failure before the first read.
	tokio::time::sleep(Duration::from_millis(20)).await;

	let mut iterator = LogIterator::<Transfer>::new(transfer_event(), subscription);
	assert!(iterator.next().await);
	assert_eq!(iterator.event().map(|event| event.token_id), Some(U256::from(1)));
	assert!(iterator.next().await);
	assert_eq!(iterator.event().map(|event| event.token_id), Some(U256::from(2)));
	assert!(!iterator.next().await);

	assert!(iterator.error().is_none());
	assert!(matches!(iterator.subscription_error(), Some(ContractError::Web3(_))));
}

#[tokio::test]
async fn test_iterator_delivers_logs_sent_before_clean_end() {
	let (subscription, control) = feed(8);
	control.logs.send(mint(5)).await.expect("feed is open");
	drop(control);

	let mut iterator = LogIterator::<Transfer>::new(transfer_event(), subscription);
	assert!(iterator.next().await);
	assert_eq!(iterator.event().map(|event| event.token_id), Some(U256::from(5)));
	assert!(!iterator.next().await);
	assert!(iterator.error().is_none());
	assert!(iterator.subscription_error().is_none());
}

#[tokio::test]
async fn test_iterator_keeps_failure_reported_after_feed_closed() {
	let feed = closing_feed(vec![mint(7)], connection_reset());

	let mut iterator = LogIterator::<Transfer>::new(transfer_event(), feed);
	assert!(iterator.next().await);
	assert_eq!(iterator.event().map(|event| event.token_id), Some(U256::from(7)));
	assert!(!iterator.next().await);

	assert!(iterator.error().is_none());
	assert!(matches!(iterator.subscription_error(), Some(ContractError::Web3(_))));
}

#[tokio::test]
async fn test_malformed_log_fails_the_iterator_for_good() {
	// Transfer topic with the token id topic missing.
	let malformed = log(
		registry_address(),
		vec![Transfer::TOPIC, Address::zero().into(), Address::repeat_byte(0x11).into()],
		vec![],
	);
	let feed = LogSubscription::replay(vec![mint(1), malformed, mint(3)]);

	let mut iterator = LogIterator::<Transfer>::new(transfer_event(), feed);
	assert!(iterator.next().await);
	assert!(!iterator.next().await);
	assert!(matches!(iterator.error(), Some(ContractError::Abi(_))));
	assert!(iterator.event().is_none());
	assert!(!iterator.next().await);
}

#[tokio::test]
async fn test_close_is_idempotent() {
	let (subscription, control) = feed(8);
	control.logs.send(mint(1)).await.expect("feed is open");

	let mut iterator = LogIterator::<Transfer>::new(transfer_event(), subscription);
	iterator.close().await;
	iterator.close().await;

	// Logs buffered before closing are still readable.
	assert!(iterator.next().await);
	assert!(!iterator.next().await);
	assert!(iterator.subscription_error().is_none());
	drop(control);
}

#[tokio::test]
async fn test_filter_scopes_topics_and_blocks() {
	let transport = Arc::new(MockTransport::default());
	let registry = registry(&transport);

	let from = Address::repeat_byte(0xaa);
	let opts = FilterOptions { from_block: Some(100u64.into()), to_block: Some(200u64.into()) };
	let mut iterator = registry
		.filter_transfer(vec![from], vec![], vec![], opts)
		.await
		.expect("filter should succeed");
	assert!(!iterator.next().await);

	let filters = transport.filters.lock();
	let filter = serde_json::to_value(&filters[0]).expect("filter serializes");
	let rendered = filter.to_string();
	assert!(rendered.contains(&format!("{:#x}", Transfer::TOPIC)));
	assert!(rendered.contains(&format!("{:#x}", web3::types::H256::from(from))));
	assert!(rendered.contains(&format!("{:#x}", registry_address())));
	assert_eq!(filter["fromBlock"], "0x64");
	assert_eq!(filter["toBlock"], "0xc8");
}
