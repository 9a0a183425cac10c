use dcn_primitives::types::{
	Address,
	Expiry,
	H256,
	PrivilegeId,
	TokenId,
	Topic,
	U256,
};
use web3::types::Log;

use super::{
	ContractEvent,
	LogParams,
};
use crate::errors::ContractError;

/// Emitted when a privilege slot of a token is assigned to `user` until `expires`.
#[derive(Clone, Debug)]
pub struct PrivilegeAssigned {
	pub token_id: TokenId,
	pub privilege_id: PrivilegeId,
	pub user: Address,
	pub expires: Expiry,
	pub raw: Log,
}

impl ContractEvent for PrivilegeAssigned {
	const NAME: &'static str = "PrivilegeAssigned";
	const SIGNATURE: &'static str = "PrivilegeAssigned(uint256,uint256,address,uint256)";
	const TOPIC: Topic = H256([
		0x00, 0xec, 0x38, 0xd8, 0xc2, 0x8e, 0xf0, 0x3d,
		0x08, 0xaf, 0x2b, 0x75, 0x30, 0xba, 0x91, 0x8d,
		0x5a, 0x69, 0x2f, 0x49, 0xa4, 0x53, 0x7f, 0x44,
		0xa9, 0x42, 0xc5, 0x6b, 0x16, 0x48, 0x81, 0xad,
	]);

	fn from_params(mut params: LogParams, raw: Log) -> Result<Self, ContractError> {
		Ok(Self {
			token_id: params.take("tokenId")?,
			privilege_id: params.take("privilegeId")?,
			user: params.take("user")?,
			expires: params.take("expires")?,
			raw,
		})
	}
}

/// Emitted when a privilege is cloned from `from` to `to`.
#[derive(Clone, Debug)]
pub struct PrivilegeCloned {
	pub token_id: TokenId,
	pub privilege_id: PrivilegeId,
	pub from: Address,
	pub to: Address,
	pub raw: Log,
}

impl ContractEvent for PrivilegeCloned {
	const NAME: &'static str = "PrivilegeCloned";
	const SIGNATURE: &'static str = "PrivilegeCloned(uint256,uint256,address,address)";
	const TOPIC: Topic = H256([
		0xd4, 0xf2, 0x23, 0x94, 0x1a, 0x2c, 0x53, 0x4b,
		0x45, 0x68, 0x65, 0xfe, 0x34, 0x5f, 0xca, 0xf9,
		0x4f, 0x8d, 0xe1, 0x43, 0x3f, 0x29, 0x6f, 0xda,
		0x49, 0xa5, 0xd7, 0x81, 0xfb, 0x5a, 0xa7, 0xa4,
	]);

	fn from_params(mut params: LogParams, raw: Log) -> Result<Self, ContractError> {
		Ok(Self {
			token_id: params.take("tokenId")?,
			privilege_id: params.take("privilegeId")?,
			from: params.take("from")?,
			to: params.take("to")?,
			raw,
		})
	}
}

/// Emitted when the number of privilege slots per token changes.
#[derive(Clone, Debug)]
pub struct PrivilegeTotalChanged {
	pub new_total: U256,
	pub old_total: U256,
	pub raw: Log,
}

impl ContractEvent for PrivilegeTotalChanged {
	const NAME: &'static str = "PrivilegeTotalChanged";
	const SIGNATURE: &'static str = "PrivilegeTotalChanged(uint256,uint256)";
	const TOPIC: Topic = H256([
		0x90, 0x11, 0xf8, 0x32, 0x34, 0xbb, 0x30, 0xfe,
		0x77, 0xff, 0xde, 0xd4, 0xdd, 0xf2, 0x4b, 0x5e,
		0xef, 0xdf, 0x09, 0x5a, 0x32, 0xa7, 0xab, 0xe4,
		0xf0, 0x2c, 0x0d, 0xdb, 0x77, 0xd4, 0x49, 0x19,
	]);

	fn from_params(mut params: LogParams, raw: Log) -> Result<Self, ContractError> {
		Ok(Self {
			new_total: params.take("newTotal")?,
			old_total: params.take("oldTotal")?,
			raw,
		})
	}
}

/// Emitted when a privilege moves between users together with its token.
#[derive(Clone, Debug)]
pub struct PrivilegeTransfer {
	pub token_id: TokenId,
	pub privilege_id: PrivilegeId,
	pub from: Address,
	pub to: Address,
	pub raw: Log,
}

impl ContractEvent for PrivilegeTransfer {
	const NAME: &'static str = "PrivilegeTransfer";
	const SIGNATURE: &'static str = "PrivilegeTransfer(uint256,uint256,address,address)";
	const TOPIC: Topic = H256([
		0x90, 0x55, 0xf0, 0x8a, 0x84, 0x58, 0xf8, 0x2d,
		0xd5, 0x74, 0xe1, 0x84, 0xa0, 0xc4, 0x2e, 0x6a,
		0xcd, 0x49, 0x7e, 0xb3, 0xa1, 0xf9, 0xb4, 0xc2,
		0xc1, 0xe7, 0x4d, 0xa9, 0x11, 0x18, 0x66, 0x58,
	]);

	fn from_params(mut params: LogParams, raw: Log) -> Result<Self, ContractError> {
		Ok(Self {
			token_id: params.take("tokenId")?,
			privilege_id: params.take("privilegeId")?,
			from: params.take("from")?,
			to: params.take("to")?,
			raw,
		})
	}
}
