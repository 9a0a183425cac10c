use dcn_primitives::types::{
	Address,
	Expiry,
	H256,
	TokenId,
	Topic,
};
use web3::types::Log;

use super::{
	ContractEvent,
	LogParams,
};
use crate::errors::ContractError;

/// Emitted when the token metadata base URI changes.
#[derive(Clone, Debug)]
pub struct BaseUriChanged {
	pub base_uri: String,
	pub raw: Log,
}

impl ContractEvent for BaseUriChanged {
	const NAME: &'static str = "BaseURIChanged";
	const SIGNATURE: &'static str = "BaseURIChanged(string)";
	const TOPIC: Topic = H256([
		0x54, 0x11, 0xe8, 0xeb, 0xf1, 0x63, 0x6d, 0x9e,
		0x83, 0xd5, 0xfc, 0x49, 0x00, 0xbf, 0x80, 0xcb,
		0xac, 0x82, 0xe8, 0x79, 0x0d, 0xa2, 0xa4, 0xc9,
		0x4d, 0xb4, 0x89, 0x5e, 0x88, 0x9e, 0xed, 0xf6,
	]);

	fn from_params(mut params: LogParams, raw: Log) -> Result<Self, ContractError> {
		Ok(Self {
			base_uri: params.take("baseURI")?,
			raw,
		})
	}
}

/// Emitted when a name is registered or re-registered after expiry.
#[derive(Clone, Debug)]
pub struct NameRegistered {
	pub id: TokenId,
	pub name: String,
	pub owner: Address,
	pub expires: Expiry,
	pub raw: Log,
}

impl ContractEvent for NameRegistered {
	const NAME: &'static str = "NameRegistered";
	const SIGNATURE: &'static str = "NameRegistered(uint256,string,address,uint256)";
	const TOPIC: Topic = H256([
		0xe9, 0xb8, 0x29, 0xb8, 0x67, 0x6c, 0x14, 0x3f,
		0x46, 0xf4, 0x58, 0xc5, 0x4a, 0xb9, 0xee, 0xde,
		0xa8, 0x0d, 0xc5, 0x8e, 0xae, 0xc9, 0xc3, 0xdf,
		0x7e, 0x01, 0x34, 0xaa, 0xbf, 0x7f, 0x9d, 0x28,
	]);

	fn from_params(mut params: LogParams, raw: Log) -> Result<Self, ContractError> {
		Ok(Self {
			id: params.take("id")?,
			name: params.take("name")?,
			owner: params.take("owner")?,
			expires: params.take("expires")?,
			raw,
		})
	}
}

/// Emitted when the registration of a name is extended.
#[derive(Clone, Debug)]
pub struct NameRenewed {
	pub id: TokenId,
	pub expires: Expiry,
	pub raw: Log,
}

impl ContractEvent for NameRenewed {
	const NAME: &'static str = "NameRenewed";
	const SIGNATURE: &'static str = "NameRenewed(uint256,uint256)";
	const TOPIC: Topic = H256([
		0x9b, 0x87, 0xa0, 0x0e, 0x30, 0xf1, 0xac, 0x65,
		0xd8, 0x98, 0xf0, 0x70, 0xf8, 0xa3, 0x48, 0x8f,
		0xe6, 0x05, 0x17, 0x18, 0x2d, 0x0a, 0x20, 0x98,
		0xe1, 0xb4, 0xb9, 0x3a, 0x54, 0xaa, 0x9b, 0xd6,
	]);

	fn from_params(mut params: LogParams, raw: Log) -> Result<Self, ContractError> {
		Ok(Self {
			id: params.take("id")?,
			expires: params.take("expires")?,
			raw,
		})
	}
}

/// Emitted when the registry is paused.
#[derive(Clone, Debug)]
pub struct Paused {
	pub account: Address,
	pub raw: Log,
}

impl ContractEvent for Paused {
	const NAME: &'static str = "Paused";
	const SIGNATURE: &'static str = "Paused(address)";
	const TOPIC: Topic = H256([
		0x62, 0xe7, 0x8c, 0xea, 0x01, 0xbe, 0xe3, 0x20,
		0xcd, 0x4e, 0x42, 0x02, 0x70, 0xb5, 0xea, 0x74,
		0x00, 0x0d, 0x11, 0xb0, 0xc9, 0xf7, 0x47, 0x54,
		0xeb, 0xdb, 0xfc, 0x54, 0x4b, 0x05, 0xa2, 0x58,
	]);

	fn from_params(mut params: LogParams, raw: Log) -> Result<Self, ContractError> {
		Ok(Self {
			account: params.take("account")?,
			raw,
		})
	}
}

/// Emitted when the registry is unpaused.
#[derive(Clone, Debug)]
pub struct Unpaused {
	pub account: Address,
	pub raw: Log,
}

impl ContractEvent for Unpaused {
	const NAME: &'static str = "Unpaused";
	const SIGNATURE: &'static str = "Unpaused(address)";
	const TOPIC: Topic = H256([
		0x5d, 0xb9, 0xee, 0x0a, 0x49, 0x5b, 0xf2, 0xe6,
		0xff, 0x9c, 0x91, 0xa7, 0x83, 0x4c, 0x1b, 0xa4,
		0xfd, 0xd2, 0x44, 0xa5, 0xe8, 0xaa, 0x4e, 0x53,
		0x7b, 0xd3, 0x8a, 0xea, 0xe4, 0xb0, 0x73, 0xaa,
	]);

	fn from_params(mut params: LogParams, raw: Log) -> Result<Self, ContractError> {
		Ok(Self {
			account: params.take("account")?,
			raw,
		})
	}
}
