//! Typed records of the events emitted by the contracts.
//!
//! ERC-721 and AccessControl events have identical signatures in both contracts and share one
//! record type each.

use dcn_primitives::types::Topic;
use ethabi::RawLog;
use web3::{
	contract::tokens::Tokenizable,
	types::Log,
};

use crate::errors::ContractError;

mod access_control;
mod erc721;
mod privilege;
mod registry;

pub use access_control::{
	RoleAdminChanged,
	RoleGranted,
	RoleRevoked,
};
pub use erc721::{
	Approval,
	ApprovalForAll,
	Transfer,
};
pub use privilege::{
	PrivilegeAssigned,
	PrivilegeCloned,
	PrivilegeTotalChanged,
	PrivilegeTransfer,
};
pub use registry::{
	BaseUriChanged,
	NameRegistered,
	NameRenewed,
	Paused,
	Unpaused,
};

/// An event declared in a contract ABI.
pub trait ContractEvent: Sized + Send + 'static {
	/// Event name as declared in the ABI.
	const NAME: &'static str;
	/// Canonical signature, `Name(type,...)`.
	const SIGNATURE: &'static str;
	/// Keccak-256 of the signature, the first topic of every non-anonymous log.
	const TOPIC: Topic;

	fn from_params(params: LogParams, raw: Log) -> Result<Self, ContractError>;
}

/// Named parameters of a parsed log.
pub struct LogParams {
	inner: Vec<ethabi::LogParam>,
}

impl LogParams {
	/// Removes the parameter called `name` and converts it into `T`.
	pub fn take<T: Tokenizable>(&mut self, name: &str) -> Result<T, ContractError> {
		let position = self
			.inner
			.iter()
			.position(|param| param.name == name)
			.ok_or_else(|| ContractError::Abi(ethabi::Error::InvalidName(name.to_owned())))?;
		let param = self.inner.swap_remove(position);
		T::from_token(param.value).map_err(ContractError::from)
	}
}

/// Decodes `log` against the ABI of `event`.
///
/// Fails when the topic count, the topic hash or the data layout do not match the event.
pub fn decode_log<E: ContractEvent>(event: &ethabi::Event, log: Log) -> Result<E, ContractError> {
	let parsed = event.parse_log(RawLog { topics: log.topics.clone(), data: log.data.0.clone() })?;
	E::from_params(LogParams { inner: parsed.params }, log)
}
