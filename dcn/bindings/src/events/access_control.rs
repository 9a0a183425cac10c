use dcn_primitives::types::{
	Address,
	H256,
	Role,
	Topic,
};
use web3::types::Log;

use super::{
	ContractEvent,
	LogParams,
};
use crate::errors::ContractError;

/// Emitted when the admin role of `role` is replaced.
#[derive(Clone, Debug)]
pub struct RoleAdminChanged {
	pub role: Role,
	pub previous_admin_role: Role,
	pub new_admin_role: Role,
	pub raw: Log,
}

impl ContractEvent for RoleAdminChanged {
	const NAME: &'static str = "RoleAdminChanged";
	const SIGNATURE: &'static str = "RoleAdminChanged(bytes32,bytes32,bytes32)";
	const TOPIC: Topic = H256([
		0xbd, 0x79, 0xb8, 0x6f, 0xfe, 0x0a, 0xb8, 0xe8,
		0x77, 0x61, 0x51, 0x51, 0x42, 0x17, 0xcd, 0x7c,
		0xac, 0xd5, 0x2c, 0x90, 0x9f, 0x66, 0x47, 0x5c,
		0x3a, 0xf4, 0x4e, 0x12, 0x9f, 0x0b, 0x00, 0xff,
	]);

	fn from_params(mut params: LogParams, raw: Log) -> Result<Self, ContractError> {
		Ok(Self {
			role: params.take("role")?,
			previous_admin_role: params.take("previousAdminRole")?,
			new_admin_role: params.take("newAdminRole")?,
			raw,
		})
	}
}

/// Emitted when `account` is granted `role` by `sender`.
#[derive(Clone, Debug)]
pub struct RoleGranted {
	pub role: Role,
	pub account: Address,
	pub sender: Address,
	pub raw: Log,
}

impl ContractEvent for RoleGranted {
	const NAME: &'static str = "RoleGranted";
	const SIGNATURE: &'static str = "RoleGranted(bytes32,address,address)";
	const TOPIC: Topic = H256([
		0x2f, 0x87, 0x88, 0x11, 0x7e, 0x7e, 0xff, 0x1d,
		0x82, 0xe9, 0x26, 0xec, 0x79, 0x49, 0x01, 0xd1,
		0x7c, 0x78, 0x02, 0x4a, 0x50, 0x27, 0x09, 0x40,
		0x30, 0x45, 0x40, 0xa7, 0x33, 0x65, 0x6f, 0x0d,
	]);

	fn from_params(mut params: LogParams, raw: Log) -> Result<Self, ContractError> {
		Ok(Self {
			role: params.take("role")?,
			account: params.take("account")?,
			sender: params.take("sender")?,
			raw,
		})
	}
}

/// Emitted when `role` is revoked from `account` by `sender`.
#[derive(Clone, Debug)]
pub struct RoleRevoked {
	pub role: Role,
	pub account: Address,
	pub sender: Address,
	pub raw: Log,
}

impl ContractEvent for RoleRevoked {
	const NAME: &'static str = "RoleRevoked";
	const SIGNATURE: &'static str = "RoleRevoked(bytes32,address,address)";
	const TOPIC: Topic = H256([
		0xf6, 0x39, 0x1f, 0x5c, 0x32, 0xd9, 0xc6, 0x9d,
		0x2a, 0x47, 0xea, 0x67, 0x0b, 0x44, 0x29, 0x74,
		0xb5, 0x39, 0x35, 0xd1, 0xed, 0xc7, 0xfd, 0x64,
		0xeb, 0x21, 0xe0, 0x47, 0xa8, 0x39, 0x17, 0x1b,
	]);

	fn from_params(mut params: LogParams, raw: Log) -> Result<Self, ContractError> {
		Ok(Self {
			role: params.take("role")?,
			account: params.take("account")?,
			sender: params.take("sender")?,
			raw,
		})
	}
}
