//! Transport seam of the bindings.
//!
//! A contract handle only needs the capabilities of the facet being used, so reads, writes and
//! log access are split in three traits. `web3::Web3` implements all of them.

use std::time::Duration;

use dcn_primitives::{
	constants::{
		DEFAULT_LOG_BUFFER,
		DEFAULT_POLL_INTERVAL,
	},
	types::{
		Address,
		BlockId,
		BlockNumber,
		Bytes,
		TransactionHash,
	},
};
use web3::{
	contract::Options,
	signing::Key,
	types::{
		Filter,
		Log,
		TransactionReceipt,
	},
};

use crate::{
	errors::ContractError,
	keys::PrivateKey,
	subscription::LogSubscription,
};

mod eth;

pub type Result<T> = std::result::Result<T, ContractError>;

/// Parameters of a read-only call.
#[derive(Clone, Debug, Default)]
pub struct CallOptions {
	/// Sender seen by the contract, none by default.
	pub from: Option<Address>,
	/// Block to run the call against, latest when unset.
	pub block: Option<BlockId>,
}

/// Parameters of a state changing transaction.
#[derive(Clone)]
pub struct TransactOptions {
	pub from: Address,
	/// Signs locally when set, otherwise the node signs for `from`.
	pub signer: Option<PrivateKey>,
	pub options: Options,
}

impl TransactOptions {
	pub fn new(from: Address) -> Self {
		Self { from, signer: None, options: Options::default() }
	}

	pub fn signed(signer: PrivateKey) -> Self {
		Self { from: signer.address(), signer: Some(signer), options: Options::default() }
	}
}

/// Block range of a historical log query.
#[derive(Clone, Debug, Default)]
pub struct FilterOptions {
	/// First block, genesis when unset.
	pub from_block: Option<BlockNumber>,
	/// Last block, latest when unset.
	pub to_block: Option<BlockNumber>,
}

/// Parameters of a live log subscription.
#[derive(Clone, Debug)]
pub struct WatchOptions {
	/// First block, the current head when unset.
	pub from_block: Option<BlockNumber>,
	pub poll_interval: Duration,
	/// Logs buffered between the transport and the consumer.
	pub log_buffer: usize,
}

impl Default for WatchOptions {
	fn default() -> Self {
		Self {
			from_block: None,
			poll_interval: DEFAULT_POLL_INTERVAL,
			log_buffer: DEFAULT_LOG_BUFFER,
		}
	}
}

/// Handle of a submitted transaction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PendingTransaction {
	pub hash: TransactionHash,
}

impl PendingTransaction {
	/// Receipt of the transaction, `None` while it is not mined.
	pub async fn receipt<T: Transactor + ?Sized>(
		&self,
		transactor: &T,
	) -> Result<Option<TransactionReceipt>> {
		transactor.transaction_receipt(self.hash).await
	}
}

/// Executes read-only calls.
#[async_trait::async_trait]
pub trait Caller: Send + Sync {
	async fn call(&self, to: Address, data: Bytes, opts: CallOptions) -> Result<Bytes>;
}

/// Submits transactions.
#[async_trait::async_trait]
pub trait Transactor: Send + Sync {
	async fn transact(
		&self,
		to: Address,
		data: Bytes,
		opts: TransactOptions,
	) -> Result<TransactionHash>;

	async fn transaction_receipt(&self, hash: TransactionHash)
		-> Result<Option<TransactionReceipt>>;
}

/// Queries historical logs and opens live log feeds.
#[async_trait::async_trait]
pub trait Filterer: Send + Sync {
	async fn filter_logs(&self, filter: Filter) -> Result<Vec<Log>>;

	async fn watch_logs(&self, filter: Filter, opts: WatchOptions) -> Result<LogSubscription>;
}
