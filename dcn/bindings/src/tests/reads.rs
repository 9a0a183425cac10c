use std::sync::Arc;

use dcn_primitives::{
	constants::{
		INTERFACE_ID_ERC721,
		REGISTRAR_ROLE,
	},
	hashing::label_hash,
	types::{
		Address,
		BlockId,
		Bytes,
		TokenId,
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
	transport::CallOptions,
};

fn calldata(selector: [u8; 4], tokens: &[Token]) -> Vec<u8> {
	let mut data = selector.to_vec();
	data.extend(ethabi::encode(tokens));
	data
}

#[tokio::test]
async fn test_owner_of_decodes_address() {
	let transport = Arc::new(MockTransport::default());
	let owner = Address::repeat_byte(0x11);
	transport.returns(&[Token::Address(owner)]);

	let token_id = label_hash("alice");
	let registry = registry(&transport);
	assert_eq!(registry.address(), registry_address());
	let result = registry.owner_of(token_id, CallOptions::default()).await;
	assert_eq!(result.expect("ownerOf should succeed"), owner);

	let calls = transport.calls.lock();
	assert_eq!(calls.len(), 1);
	assert_eq!(calls[0].0, registry_address());
	assert_eq!(calls[0].1 .0, calldata([0x63, 0x52, 0x21, 0x1e], &[Token::Uint(token_id)]));
}

#[tokio::test]
async fn test_name_of_decodes_string() {
	let transport = Arc::new(MockTransport::default());
	transport.returns(&[Token::String("alice".to_owned())]);

	let name = registry(&transport)
		.name_of(label_hash("alice"), CallOptions::default())
		.await
		.expect("nameOf should succeed");
	assert_eq!(name, "alice");
}

#[tokio::test]
async fn test_registrar_role_decodes_fixed_bytes() {
	let transport = Arc::new(MockTransport::default());
	transport.returns(&[Token::FixedBytes(REGISTRAR_ROLE.as_bytes().to_vec())]);

	let role = registry(&transport)
		.registrar_role(CallOptions::default())
		.await
		.expect("REGISTRAR_ROLE should succeed");
	assert_eq!(role, *REGISTRAR_ROLE);
	assert_eq!(transport.calls.lock()[0].1 .0, vec![0xf6, 0x8e, 0x95, 0x53]);
}

#[tokio::test]
async fn test_available_and_expiry() {
	let transport = Arc::new(MockTransport::default());
	transport.returns(&[Token::Bool(false)]);
	transport.returns(&[Token::Uint(U256::from(1_700_000_000u64))]);

	let registry = registry(&transport);
	let token_id = label_hash("alice");
	assert!(!registry.available(token_id, CallOptions::default()).await.expect("available"));
	assert_eq!(
		registry.name_expires(token_id, CallOptions::default()).await.expect("nameExpires"),
		U256::from(1_700_000_000u64)
	);
}

#[tokio::test]
async fn test_supports_interface_encodes_bytes4() {
	let transport = Arc::new(MockTransport::default());
	transport.returns(&[Token::Bool(true)]);

	let supported = registry(&transport)
		.supports_interface(INTERFACE_ID_ERC721, CallOptions::default())
		.await
		.expect("supportsInterface should succeed");
	assert!(supported);

	let mut expected = vec![0x01, 0xff, 0xc9, 0xa7, 0x80, 0xac, 0x58, 0xcd];
	expected.extend([0u8; 28]);
	assert_eq!(transport.calls.lock()[0].1 .0, expected);
}

#[tokio::test]
async fn test_privilege_of_decodes_multiple_values() {
	let transport = Arc::new(MockTransport::default());
	let user = Address::repeat_byte(0x22);
	transport.returns(&[Token::Address(user), Token::Uint(U256::from(86_400))]);

	let (holder, expires) = privilege(&transport)
		.privilege_of(TokenId::from(7), U256::from(2), CallOptions::default())
		.await
		.expect("privilegeOf should succeed");
	assert_eq!(holder, user);
	assert_eq!(expires, U256::from(86_400));
	assert_eq!(
		transport.calls.lock()[0].1 .0,
		calldata(
			[0x84, 0x13, 0xc1, 0xdd],
			&[Token::Uint(U256::from(7)), Token::Uint(U256::from(2))]
		)
	);
}

#[tokio::test]
async fn test_call_options_are_forwarded() {
	let transport = Arc::new(MockTransport::default());
	transport.returns(&[Token::Uint(U256::from(3))]);

	let sender = Address::repeat_byte(0x33);
	let opts = CallOptions { from: Some(sender), block: Some(BlockId::Number(42u64.into())) };
	let balance = privilege(&transport)
		.balance_of(sender, opts)
		.await
		.expect("balanceOf should succeed");
	assert_eq!(balance, U256::from(3));

	let calls = transport.calls.lock();
	assert_eq!(calls[0].2.from, Some(sender));
	assert_eq!(calls[0].2.block, Some(BlockId::Number(42u64.into())));
}

#[tokio::test]
async fn test_transport_error_is_returned() {
	let transport = Arc::new(MockTransport::default());
	transport.call_results.lock().push_back(Err(connection_reset()));

	let result = registry(&transport).paused(CallOptions::default()).await;
	assert!(matches!(
		result,
		Err(ContractError::Web3(web3::Error::InvalidResponse(message)))
			if message == "connection reset"
	));
}

#[tokio::test]
async fn test_empty_output_is_a_decode_error() {
	let transport = Arc::new(MockTransport::default());
	transport.call_results.lock().push_back(Ok(Bytes::default()));

	let result = registry(&transport).owner_of(label_hash("alice"), CallOptions::default()).await;
	assert!(matches!(result, Err(ContractError::Abi(_))));
}
