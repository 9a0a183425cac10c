use std::sync::Arc;

use dcn_primitives::{
	constants::MINTER_ROLE,
	types::{
		Address,
		Bytes,
		TokenId,
		H256,
		U256,
	},
};
use ethabi::Token;

use super::mock::{
	connection_reset,
	privilege,
	registry,
	registry_address,
	MockTransport,
};
use crate::{
	errors::ContractError,
	proxies::PrivilegeRecord,
	transport::{
		PendingTransaction,
		TransactOptions,
	},
};

fn sender() -> Address {
	Address::repeat_byte(0x5e)
}

fn calldata(selector: [u8; 4], tokens: &[Token]) -> Vec<u8> {
	let mut data = selector.to_vec();
	data.extend(ethabi::encode(tokens));
	data
}

#[tokio::test]
async fn test_register_dispatches_encoded_arguments() {
	let transport = Arc::new(MockTransport::default());
	let hash = H256::repeat_byte(0xab);
	transport.transact_results.lock().push_back(Ok(hash));

	let registry = registry(&transport);
	let owner = Address::repeat_byte(0x11);
	let duration = U256::from(31_536_000u64);
	let pending = registry
		.register("alice".to_owned(), owner, duration, TransactOptions::new(sender()))
		.await
		.expect("register should succeed");
	assert_eq!(pending, PendingTransaction { hash });

	let transactions = transport.transactions.lock();
	assert_eq!(transactions.len(), 1);
	let (to, data, from) = &transactions[0];
	assert_eq!(*to, registry_address());
	assert_eq!(*from, sender());
	assert_eq!(
		data.0,
		calldata(
			[0xd3, 0x93, 0xc8, 0x71],
			&[Token::String("alice".to_owned()), Token::Address(owner), Token::Uint(duration)]
		)
	);
}

#[tokio::test]
async fn test_safe_transfer_from_resolves_overloads() {
	let transport = Arc::new(MockTransport::default());
	transport.transact_results.lock().push_back(Ok(H256::repeat_byte(1)));
	transport.transact_results.lock().push_back(Ok(H256::repeat_byte(2)));

	let registry = registry(&transport);
	let to = Address::repeat_byte(0x22);
	let token_id = TokenId::from(9);
	registry
		.safe_transfer_from(sender(), to, token_id, TransactOptions::new(sender()))
		.await
		.expect("safeTransferFrom should succeed");
	registry
		.safe_transfer_from_with_data(
			sender(),
			to,
			token_id,
			Bytes(vec![0xca, 0xfe]),
			TransactOptions::new(sender()),
		)
		.await
		.expect("safeTransferFrom with data should succeed");

	let transactions = transport.transactions.lock();
	assert_eq!(transactions[0].1 .0[..4], [0x42, 0x84, 0x2e, 0x0e]);
	assert_eq!(transactions[1].1 .0[..4], [0xb8, 0x8d, 0x4f, 0xde]);
	assert_eq!(
		transactions[1].1 .0,
		calldata(
			[0xb8, 0x8d, 0x4f, 0xde],
			&[
				Token::Address(sender()),
				Token::Address(to),
				Token::Uint(token_id),
				Token::Bytes(vec![0xca, 0xfe])
			]
		)
	);
}

#[tokio::test]
async fn test_batch_set_privileges_encodes_tuple_array() {
	let transport = Arc::new(MockTransport::default());
	transport.transact_results.lock().push_back(Ok(H256::repeat_byte(3)));

	let privilege = privilege(&transport);
	let records = vec![
		PrivilegeRecord {
			token_id: U256::from(1),
			privilege_id: U256::from(0),
			user: Address::repeat_byte(0x01),
			expires: U256::from(1_000),
		},
		PrivilegeRecord {
			token_id: U256::from(1),
			privilege_id: U256::from(1),
			user: Address::repeat_byte(0x02),
			expires: U256::from(2_000),
		},
	];
	privilege
		.batch_set_privileges(records.clone(), TransactOptions::new(sender()))
		.await
		.expect("batchSetPrivileges should succeed");

	let tuples = records
		.iter()
		.map(|record| {
			Token::Tuple(vec![
				Token::Uint(record.token_id),
				Token::Uint(record.privilege_id),
				Token::Address(record.user),
				Token::Uint(record.expires),
			])
		})
		.collect();
	assert_eq!(
		transport.transactions.lock()[0].1 .0,
		calldata([0xea, 0x49, 0xca, 0x63], &[Token::Array(tuples)])
	);
}

#[tokio::test]
async fn test_grant_role_passes_role_bytes() {
	let transport = Arc::new(MockTransport::default());
	transport.transact_results.lock().push_back(Ok(H256::repeat_byte(4)));

	let privilege = privilege(&transport);
	let account = Address::repeat_byte(0x44);
	privilege
		.grant_role(*MINTER_ROLE, account, TransactOptions::new(sender()))
		.await
		.expect("grantRole should succeed");

	assert_eq!(
		transport.transactions.lock()[0].1 .0,
		calldata(
			[0x2f, 0x2f, 0xf1, 0x5d],
			&[Token::FixedBytes(MINTER_ROLE.as_bytes().to_vec()), Token::Address(account)]
		)
	);
}

#[tokio::test]
async fn test_transactor_error_is_returned_unchanged() {
	let transport = Arc::new(MockTransport::default());
	transport.transact_results.lock().push_back(Err(connection_reset()));

	let registry = registry(&transport);
	let result = registry.pause(TransactOptions::new(sender())).await;
	assert!(matches!(
		result,
		Err(ContractError::Web3(web3::Error::InvalidResponse(message)))
			if message == "connection reset"
	));
}

#[tokio::test]
async fn test_arguments_matching_no_overload_are_rejected() {
	let transport = Arc::new(MockTransport::default());

	let registry = registry(&transport);
	let result = registry.transact("approve", (true,), TransactOptions::new(sender())).await;
	assert!(matches!(result, Err(ContractError::UnknownFunction(name)) if name == "approve"));
	assert!(transport.transactions.lock().is_empty());
}

#[tokio::test]
async fn test_pending_transaction_queries_receipt() {
	let transport = Arc::new(MockTransport::default());
	let hash = H256::repeat_byte(0x77);
	transport.transact_results.lock().push_back(Ok(hash));

	let privilege = privilege(&transport);
	let pending = privilege
		.mint(Address::repeat_byte(0x12), TransactOptions::new(sender()))
		.await
		.expect("mint should succeed");

	let receipt = pending.receipt(transport.as_ref()).await.expect("receipt query should succeed");
	assert!(receipt.is_none());
	assert_eq!(*transport.receipts.lock(), vec![hash]);
}
