use thiserror::Error;

/// Errors raised while loading the embedded contract ABIs.
#[derive(Error, Debug)]
pub enum ContractDefError {
	#[error("ABI parsing error: `{0}`")]
	ABI(ethabi::Error),
}

impl From<ethabi::Error> for ContractDefError {
	fn from(e: ethabi::Error) -> Self {
		Self::ABI(e)
	}
}

/// Errors raised by contract calls, transactions and log feeds.
#[derive(Error, Debug)]
pub enum ContractError {
	#[error("ABI error: `{0}`")]
	Abi(ethabi::Error),
	#[error("Blockchain error: `{0}`")]
	Web3(web3::Error),
	#[error("Blockchain error: `{0}`")]
	ChainError(web3::contract::Error),
	#[error("No overload of `{0}` accepts the given arguments")]
	UnknownFunction(String),
	#[error("Event sink closed")]
	SinkClosed,
}

impl From<ethabi::Error> for ContractError {
	fn from(e: ethabi::Error) -> Self {
		Self::Abi(e)
	}
}

impl From<web3::Error> for ContractError {
	fn from(e: web3::Error) -> Self {
		Self::Web3(e)
	}
}

impl From<web3::contract::Error> for ContractError {
	fn from(e: web3::contract::Error) -> Self {
		Self::ChainError(e)
	}
}
