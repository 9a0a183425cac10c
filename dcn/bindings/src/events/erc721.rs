use dcn_primitives::types::{
	Address,
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

/// Emitted when `token_id` moves from `from` to `to`. Mints come from the zero address.
#[derive(Clone, Debug)]
pub struct Transfer {
	pub from: Address,
	pub to: Address,
	pub token_id: TokenId,
	pub raw: Log,
}

impl ContractEvent for Transfer {
	const NAME: &'static str = "Transfer";
	const SIGNATURE: &'static str = "Transfer(address,address,uint256)";
	const TOPIC: Topic = H256([
		0xdd, 0xf2, 0x52, 0xad, 0x1b, 0xe2, 0xc8, 0x9b,
		0x69, 0xc2, 0xb0, 0x68, 0xfc, 0x37, 0x8d, 0xaa,
		0x95, 0x2b, 0xa7, 0xf1, 0x63, 0xc4, 0xa1, 0x16,
		0x28, 0xf5, 0x5a, 0x4d, 0xf5, 0x23, 0xb3, 0xef,
	]);

	fn from_params(mut params: LogParams, raw: Log) -> Result<Self, ContractError> {
		Ok(Self {
			from: params.take("from")?,
			to: params.take("to")?,
			token_id: params.take("tokenId")?,
			raw,
		})
	}
}

/// Emitted when `owner` approves `approved` to manage `token_id`.
#[derive(Clone, Debug)]
pub struct Approval {
	pub owner: Address,
	pub approved: Address,
	pub token_id: TokenId,
	pub raw: Log,
}

impl ContractEvent for Approval {
	const NAME: &'static str = "Approval";
	const SIGNATURE: &'static str = "Approval(address,address,uint256)";
	const TOPIC: Topic = H256([
		0x8c, 0x5b, 0xe1, 0xe5, 0xeb, 0xec, 0x7d, 0x5b,
		0xd1, 0x4f, 0x71, 0x42, 0x7d, 0x1e, 0x84, 0xf3,
		0xdd, 0x03, 0x14, 0xc0, 0xf7, 0xb2, 0x29, 0x1e,
		0x5b, 0x20, 0x0a, 0xc8, 0xc7, 0xc3, 0xb9, 0x25,
	]);

	fn from_params(mut params: LogParams, raw: Log) -> Result<Self, ContractError> {
		Ok(Self {
			owner: params.take("owner")?,
			approved: params.take("approved")?,
			token_id: params.take("tokenId")?,
			raw,
		})
	}
}

/// Emitted when `owner` enables or disables `operator` for all of its tokens.
#[derive(Clone, Debug)]
pub struct ApprovalForAll {
	pub owner: Address,
	pub operator: Address,
	pub approved: bool,
	pub raw: Log,
}

impl ContractEvent for ApprovalForAll {
	const NAME: &'static str = "ApprovalForAll";
	const SIGNATURE: &'static str = "ApprovalForAll(address,address,bool)";
	const TOPIC: Topic = H256([
		0x17, 0x30, 0x7e, 0xab, 0x39, 0xab, 0x61, 0x07,
		0xe8, 0x89, 0x98, 0x45, 0xad, 0x3d, 0x59, 0xbd,
		0x96, 0x53, 0xf2, 0x00, 0xf2, 0x20, 0x92, 0x04,
		0x89, 0xca, 0x2b, 0x59, 0x37, 0x69, 0x6c, 0x31,
	]);

	fn from_params(mut params: LogParams, raw: Log) -> Result<Self, ContractError> {
		Ok(Self {
			owner: params.take("owner")?,
			operator: params.take("operator")?,
			approved: params.take("approved")?,
			raw,
		})
	}
}
