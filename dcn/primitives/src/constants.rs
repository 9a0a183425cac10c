use std::time::Duration;

use lazy_static::lazy_static;
use web3::signing::keccak256;

use crate::types::{
	InterfaceId,
	Role,
};

lazy_static! {
	pub static ref DEFAULT_ADMIN_ROLE: Role = Role::zero();
	pub static ref REGISTRAR_ROLE: Role = Role::from_slice(&keccak256(b"REGISTRAR_ROLE"));
	pub static ref MINTER_ROLE: Role = Role::from_slice(&keccak256(b"MINTER_ROLE"));
}

pub const INTERFACE_ID_ERC165: InterfaceId = [0x01, 0xff, 0xc9, 0xa7];
pub const INTERFACE_ID_ERC721: InterfaceId = [0x80, 0xac, 0x58, 0xcd];
pub const INTERFACE_ID_ERC721_METADATA: InterfaceId = [0x5b, 0x5e, 0x13, 0x9f];
pub const INTERFACE_ID_ACCESS_CONTROL: InterfaceId = [0x79, 0x65, 0xdb, 0x0b];

/// How often a watched log filter is polled for changes.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Capacity of the channel between a log feed and its consumer.
pub const DEFAULT_LOG_BUFFER: usize = 128;
