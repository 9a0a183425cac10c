pub use web3::types::{
	Address,
	BlockId,
	Bytes,
	H160,
	H256,
	U256,
	U64,
};

pub type BlockNumber = U64;

pub type BlockHash = H256;

/// Unix timestamp in seconds.
pub type Expiry = U256;

pub type InterfaceId = [u8; 4];

pub type Node = H256;

pub type PrivilegeId = U256;

pub type Role = H256;

/// Length of a registration or renewal, in seconds.
pub type Seconds = U256;

pub type Selector = [u8; 4];

pub type TokenId = U256;

pub type Topic = H256;

pub type TransactionHash = H256;
