use tokio::sync::mpsc;
use tracing::debug;
use web3::types::Log;

use crate::{
	errors::ContractError,
	events::{
		decode_log,
		ContractEvent,
	},
	subscription::{
		LogSubscription,
		Subscription,
	},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
	/// Waiting on the log feed.
	Active,
	/// Upstream is done, only logs already buffered are delivered.
	Draining,
	Exhausted,
	Failed,
}

/// Cursor over the decoded logs of one event.
///
/// Logs buffered before the feed ended or failed are still delivered. A log that does not
/// decode stops the iteration for good.
pub struct LogIterator<E> {
	event: &'static ethabi::Event,
	logs: mpsc::Receiver<Log>,
	subscription: Subscription,
	state: State,
	current: Option<E>,
	failure: Option<ContractError>,
	upstream_failure: Option<ContractError>,
}

impl<E: ContractEvent> LogIterator<E> {
	pub(crate) fn new(event: &'static ethabi::Event, feed: LogSubscription) -> Self {
		Self {
			event,
			logs: feed.logs,
			subscription: feed.subscription,
			state: State::Active,
			current: None,
			failure: None,
			upstream_failure: None,
		}
	}

	/// Advances to the next event. Returns `false` once the iteration is over, either because
	/// the feed is exhausted or because a log failed to decode.
	pub async fn next(&mut self) -> bool {
		loop {
			match self.state {
				State::Exhausted | State::Failed => return false,
				State::Draining => {
					return match self.logs.try_recv() {
						Ok(log) => self.decode(log),
						Err(_) => {
							self.state = State::Exhausted;
							false
						},
					}
				},
				State::Active => {
					tokio::select! {
						biased;
						error = self.subscription.err() => {
							if let Some(e) = error {
								debug!(
									message = "Log feed failed, draining",
									event = E::NAME,
									error = %e
								);
								self.upstream_failure = Some(e);
							}
							self.state = State::Draining;
						},
						log = self.logs.recv() => match log {
							Some(log) => return self.decode(log),
							None => {
								if let Some(e) = self.subscription.err().await {
									self.upstream_failure = Some(e);
								}
								self.state = State::Exhausted;
								return false
							},
						},
					}
				},
			}
		}
	}

	fn decode(&mut self, log: Log) -> bool {
		match decode_log::<E>(self.event, log) {
			Ok(event) => {
				self.current = Some(event);
				true
			},
			Err(e) => {
				self.current = None;
				self.failure = Some(e);
				self.state = State::Failed;
				false
			},
		}
	}

	/// Event produced by the last successful `next`.
	pub fn event(&self) -> Option<&E> {
		self.current.as_ref()
	}

	pub fn take_event(&mut self) -> Option<E> {
		self.current.take()
	}

	/// Decode failure that ended the iteration.
	pub fn error(&self) -> Option<&ContractError> {
		self.failure.as_ref()
	}

	/// Failure of the log feed. Logs buffered at that point are still delivered and this
	/// error does not end the iteration early.
	pub fn subscription_error(&self) -> Option<&ContractError> {
		self.upstream_failure.as_ref()
	}

	/// Cancels the log feed. Logs already buffered remain readable.
	pub async fn close(&mut self) {
		self.subscription.unsubscribe().await;
		if self.state == State::Active {
			self.state = State::Draining;
		}
	}
}
