use std::future::Future;

use tokio::{
	sync::{
		mpsc,
		oneshot,
	},
	task::JoinHandle,
};
use web3::types::Log;

use crate::errors::ContractError;

/// Raw log feed opened by a transport: buffered logs plus the subscription producing them.
pub struct LogSubscription {
	pub logs: mpsc::Receiver<Log>,
	pub subscription: Subscription,
}

impl LogSubscription {
	/// Feeds an already fetched batch of logs and ends cleanly after the last one.
	pub fn replay(logs: Vec<Log>) -> Self {
		let (logs_tx, receiver) = mpsc::channel(logs.len().max(1));
		let subscription = Subscription::spawn(move |quit| replay_logs(logs, logs_tx, quit));
		Self { logs: receiver, subscription }
	}
}

async fn replay_logs(
	logs: Vec<Log>,
	logs_tx: mpsc::Sender<Log>,
	mut quit: oneshot::Receiver<()>,
) -> Result<(), ContractError> {
	for log in logs {
		tokio::select! {
			biased;
			_ = &mut quit => return Ok(()),
			sent = logs_tx.send(log) => if sent.is_err() {
				return Ok(())
			},
		}
	}
	Ok(())
}

/// Handle of a background producer.
///
/// The producer stops when `unsubscribe` is called or the handle is dropped. A producer failure
/// is reported once through `err`.
pub struct Subscription {
	quit: Option<oneshot::Sender<()>>,
	errors: mpsc::Receiver<ContractError>,
	producer: Option<JoinHandle<()>>,
}

impl Subscription {
	/// Spawns `producer` on the runtime, handing it the quit signal it must observe.
	pub fn spawn<F, Fut>(producer: F) -> Self
	where
		F: FnOnce(oneshot::Receiver<()>) -> Fut,
		Fut: Future<Output = Result<(), ContractError>> + Send + 'static,
	{
		let (quit_tx, quit_rx) = oneshot::channel();
		let (errors_tx, errors) = mpsc::channel(1);

		let task = producer(quit_rx);
		let producer = tokio::spawn(async move {
			if let Err(e) = task.await {
				let _ = errors_tx.send(e).await;
			}
		});

		Self { quit: Some(quit_tx), errors, producer: Some(producer) }
	}

	/// Waits for the producer to fail.
	///
	/// Resolves to `None` once the producer finished without error or the subscription was
	/// cancelled.
	pub async fn err(&mut self) -> Option<ContractError> {
		self.errors.recv().await
	}

	/// Stops the producer and waits for it to exit. Calling it again is a no-op.
	///
	/// An error the producer may have reported before is discarded.
	pub async fn unsubscribe(&mut self) {
		if let Some(quit) = self.quit.take() {
			let _ = quit.send(());
		}
		if let Some(producer) = self.producer.take() {
			let _ = producer.await;
		}
		self.errors.close();
		while self.errors.try_recv().is_ok() {}
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		if let Some(quit) = self.quit.take() {
			let _ = quit.send(());
		}
	}
}
