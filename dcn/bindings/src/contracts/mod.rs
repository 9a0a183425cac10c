use derive_more::Display;
use once_cell::sync::OnceCell;

use crate::errors::ContractDefError;

mod consts;
mod selectors;

pub use selectors::{
	FunctionSelector,
	DCN_REGISTRY_FUNCTIONS,
	MULTI_PRIVILEGE_FUNCTIONS,
};

static DCN_REGISTRY: OnceCell<ethabi::Contract> = OnceCell::new();
static MULTI_PRIVILEGE: OnceCell<ethabi::Contract> = OnceCell::new();

/// Contracts covered by these bindings.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Hash)]
pub enum ContractIdentifier {
	DcnRegistry,
	MultiPrivilege,
}

impl ContractIdentifier {
	/// ABI JSON text embedded at build time.
	pub fn abi_json(&self) -> &'static str {
		match self {
			Self::DcnRegistry => consts::DCN_REGISTRY_ABI,
			Self::MultiPrivilege => consts::MULTI_PRIVILEGE_ABI,
		}
	}

	/// Parsed ABI. Parsing happens once per process.
	pub fn abi(&self) -> Result<&'static ethabi::Contract, ContractDefError> {
		let cell = match self {
			Self::DcnRegistry => &DCN_REGISTRY,
			Self::MultiPrivilege => &MULTI_PRIVILEGE,
		};
		cell.get_or_try_init(|| ethabi::Contract::load(self.abi_json().as_bytes()))
			.map_err(ContractDefError::from)
	}

	/// Function selector table of the contract.
	pub fn functions(&self) -> &'static [FunctionSelector] {
		match self {
			Self::DcnRegistry => DCN_REGISTRY_FUNCTIONS,
			Self::MultiPrivilege => MULTI_PRIVILEGE_FUNCTIONS,
		}
	}
}
