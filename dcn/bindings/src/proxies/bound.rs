use std::sync::Arc;

use dcn_primitives::types::{
	Address,
	BlockNumber,
};
use ethabi::{
	Function,
	RawTopicFilter,
	Token,
};
use tokio::sync::mpsc;
use tracing::debug;
use web3::{
	contract::tokens::{
		Detokenize,
		Tokenize,
	},
	types::{
		Bytes,
		Log,
	},
};

use crate::{
	errors::ContractError,
	events::{
		decode_log,
		ContractEvent,
	},
	filters::event_filter,
	iterator::LogIterator,
	subscription::{
		LogSubscription,
		Subscription,
	},
	transport::{
		CallOptions,
		Caller,
		FilterOptions,
		Filterer,
		PendingTransaction,
		Result,
		TransactOptions,
		Transactor,
		WatchOptions,
	},
	watch::forward_events,
};

/// A contract ABI bound to an address and a transport.
///
/// Functions are addressed by their ABI name. Overloads are resolved from the argument types.
pub struct BoundContract<T> {
	address: Address,
	abi: &'static ethabi::Contract,
	transport: Arc<T>,
}

impl<T> Clone for BoundContract<T> {
	fn clone(&self) -> Self {
		Self { address: self.address, abi: self.abi, transport: self.transport.clone() }
	}
}

impl<T> BoundContract<T> {
	pub fn new(address: Address, abi: &'static ethabi::Contract, transport: Arc<T>) -> Self {
		Self { address, abi, transport }
	}

	pub fn address(&self) -> Address {
		self.address
	}

	/// ABI function called `name` accepting `tokens`.
	pub fn function(&self, name: &str, tokens: &[Token]) -> Result<&'static Function> {
		let abi: &'static ethabi::Contract = self.abi;
		abi.functions_by_name(name)?
			.iter()
			.find(|function| {
				let kinds: Vec<_> =
					function.inputs.iter().map(|param| param.kind.clone()).collect();
				Token::types_check(tokens, &kinds)
			})
			.ok_or_else(|| ContractError::UnknownFunction(name.to_owned()))
	}

	/// Calldata of `name` called with `params`.
	pub fn encode<P: Tokenize>(&self, name: &str, params: P) -> Result<(&'static Function, Bytes)> {
		let tokens = params.into_tokens();
		let function = self.function(name, &tokens)?;
		let data = function.encode_input(&tokens)?;
		Ok((function, data.into()))
	}

	pub fn event(&self, name: &str) -> Result<&'static ethabi::Event> {
		let abi: &'static ethabi::Contract = self.abi;
		Ok(abi.event(name)?)
	}

	/// Decodes a single log as `E`.
	pub fn parse_event<E: ContractEvent>(&self, log: Log) -> Result<E> {
		decode_log(self.event(E::NAME)?, log)
	}
}

impl<T: Caller> BoundContract<T> {
	/// Executes the read-only function `name` and decodes its outputs as `R`.
	pub async fn call<P: Tokenize, R: Detokenize>(
		&self,
		name: &str,
		params: P,
		opts: CallOptions,
	) -> Result<R> {
		let (function, data) = self.encode(name, params)?;
		let output = self.transport.call(self.address, data, opts).await?;
		let tokens = function.decode_output(&output.0)?;
		R::from_tokens(tokens).map_err(Into::into)
	}
}

impl<T: Transactor> BoundContract<T> {
	/// Submits a transaction calling `name` without waiting for it to be mined.
	pub async fn transact<P: Tokenize>(
		&self,
		name: &str,
		params: P,
		opts: TransactOptions,
	) -> Result<PendingTransaction> {
		let (_, data) = self.encode(name, params)?;
		let hash = self.transport.transact(self.address, data, opts).await?;
		Ok(PendingTransaction { hash })
	}
}

impl<T: Filterer> BoundContract<T> {
	/// Iterates over the past logs of `E` matching `topics`.
	pub async fn filter_events<E: ContractEvent>(
		&self,
		topics: RawTopicFilter,
		opts: FilterOptions,
	) -> Result<LogIterator<E>> {
		let event = self.event(E::NAME)?;
		let filter = event_filter(
			self.address,
			event,
			topics,
			Some(opts.from_block.unwrap_or_else(BlockNumber::zero)),
			opts.to_block,
		)?;

		let logs = self.transport.filter_logs(filter).await?;
		debug!(message = "Fetched contract logs", event = E::NAME, count = logs.len());

		Ok(LogIterator::new(event, LogSubscription::replay(logs)))
	}

	/// Pushes every new log of `E` matching `topics` into `sink`.
	pub async fn watch_events<E: ContractEvent>(
		&self,
		sink: mpsc::Sender<E>,
		topics: RawTopicFilter,
		opts: WatchOptions,
	) -> Result<Subscription> {
		let event = self.event(E::NAME)?;
		let filter = event_filter(self.address, event, topics, opts.from_block, None)?;

		let feed = self.transport.watch_logs(filter, opts).await?;
		debug!(
			message = "Watching contract events",
			event = E::NAME,
			address = format!("{:#x}", self.address)
		);

		Ok(Subscription::spawn(move |quit| forward_events(event, feed, sink, quit)))
	}
}
