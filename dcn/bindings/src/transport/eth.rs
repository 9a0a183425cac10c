use std::time::Duration;

use dcn_primitives::types::{
	Address,
	Bytes,
	TransactionHash,
};
use futures::{
	Stream,
	StreamExt,
};
use tokio::sync::{
	mpsc,
	oneshot,
};
use tracing::{
	debug,
	warn,
};
use web3::{
	api::BaseFilter,
	types::{
		CallRequest,
		Filter,
		Log,
		TransactionParameters,
		TransactionReceipt,
		TransactionRequest,
	},
	Transport,
	Web3,
};

use super::{
	CallOptions,
	Caller,
	Filterer,
	Result,
	TransactOptions,
	Transactor,
	WatchOptions,
};
use crate::subscription::{
	LogSubscription,
	Subscription,
};

#[async_trait::async_trait]
impl<T> Caller for Web3<T>
where
	T: Transport + Send + Sync,
	T::Out: Send,
{
	async fn call(&self, to: Address, data: Bytes, opts: CallOptions) -> Result<Bytes> {
		let request =
			CallRequest { from: opts.from, to: Some(to), data: Some(data), ..Default::default() };
		Ok(self.eth().call(request, opts.block).await?)
	}
}

#[async_trait::async_trait]
impl<T> Transactor for Web3<T>
where
	T: Transport + Send + Sync,
	T::Out: Send,
{
	async fn transact(
		&self,
		to: Address,
		data: Bytes,
		opts: TransactOptions,
	) -> Result<TransactionHash> {
		let TransactOptions { from, signer, options } = opts;

		let gas = match options.gas {
			Some(gas) => gas,
			None => {
				let request = CallRequest {
					from: Some(from),
					to: Some(to),
					data: Some(data.clone()),
					value: options.value,
					..Default::default()
				};
				self.eth().estimate_gas(request, None).await?
			},
		};

		let hash = match signer {
			Some(signer) => {
				let parameters = TransactionParameters {
					nonce: options.nonce,
					to: Some(to),
					gas,
					gas_price: options.gas_price,
					value: options.value.unwrap_or_default(),
					data,
					transaction_type: options.transaction_type,
					access_list: options.access_list,
					max_fee_per_gas: options.max_fee_per_gas,
					max_priority_fee_per_gas: options.max_priority_fee_per_gas,
					..Default::default()
				};
				let signed = self.accounts().sign_transaction(parameters, signer).await?;
				self.eth().send_raw_transaction(signed.raw_transaction).await?
			},
			None => {
				let request = TransactionRequest {
					from,
					to: Some(to),
					gas: Some(gas),
					gas_price: options.gas_price,
					value: options.value,
					data: Some(data),
					nonce: options.nonce,
					condition: options.condition,
					transaction_type: options.transaction_type,
					access_list: options.access_list,
					max_fee_per_gas: options.max_fee_per_gas,
					max_priority_fee_per_gas: options.max_priority_fee_per_gas,
				};
				self.eth().send_transaction(request).await?
			},
		};

		debug!(
			message = "Transaction submitted",
			to = format!("{:#x}", to),
			hash = format!("{:#x}", hash)
		);
		Ok(hash)
	}

	async fn transaction_receipt(
		&self,
		hash: TransactionHash,
	) -> Result<Option<TransactionReceipt>> {
		Ok(self.eth().transaction_receipt(hash).await?)
	}
}

#[async_trait::async_trait]
impl<T> Filterer for Web3<T>
where
	T: Transport + Send + Sync + 'static,
	T::Out: Send,
{
	async fn filter_logs(&self, filter: Filter) -> Result<Vec<Log>> {
		Ok(self.eth().logs(filter).await?)
	}

	async fn watch_logs(&self, filter: Filter, opts: WatchOptions) -> Result<LogSubscription> {
		let log_filter = self.eth_filter().create_logs_filter(filter).await?;
		let (logs_tx, logs) = mpsc::channel(opts.log_buffer.max(1));
		let poll_interval = opts.poll_interval;

		let subscription =
			Subscription::spawn(move |quit| poll_logs(log_filter, poll_interval, logs_tx, quit));

		Ok(LogSubscription { logs, subscription })
	}
}

/// Polls an installed log filter and forwards every new log until told to quit.
///
/// The filter is uninstalled from the node whichever way polling ends.
async fn poll_logs<T: Transport>(
	log_filter: BaseFilter<T, Log>,
	poll_interval: Duration,
	logs_tx: mpsc::Sender<Log>,
	quit: oneshot::Receiver<()>,
) -> Result<()> {
	let result = forward_logs(log_filter.clone().stream(poll_interval), logs_tx, quit).await;

	match log_filter.uninstall().await {
		Ok(_) => debug!(message = "Log filter uninstalled"),
		Err(e) => warn!(message = "Could not uninstall log filter", error = %e),
	}
	result
}

async fn forward_logs<S>(
	stream: S,
	logs_tx: mpsc::Sender<Log>,
	mut quit: oneshot::Receiver<()>,
) -> Result<()>
where
	S: Stream<Item = web3::Result<Log>>,
{
	futures::pin_mut!(stream);

	loop {
		let log = tokio::select! {
			biased;
			_ = &mut quit => return Ok(()),
			item = stream.next() => match item {
				Some(log) => log?,
				None => return Ok(()),
			},
		};
		tokio::select! {
			biased;
			_ = &mut quit => return Ok(()),
			sent = logs_tx.send(log) => if sent.is_err() {
				debug!(message = "Log consumer went away, stopping the filter poll");
				return Ok(())
			},
		}
	}
}
