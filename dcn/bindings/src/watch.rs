use tokio::sync::{
	mpsc,
	oneshot,
};
use tracing::{
	debug,
	error,
};

use crate::{
	errors::ContractError,
	events::{
		decode_log,
		ContractEvent,
	},
	subscription::LogSubscription,
};

/// Decodes the logs of `feed` and pushes them into `sink` until told to quit.
///
/// Cancellation wins over an upstream failure, which wins over new logs. A clean upstream end
/// still forwards the logs already buffered, and a feed that closes before its producer reports
/// a failure still ends with that failure.
pub(crate) async fn forward_events<E: ContractEvent>(
	event: &'static ethabi::Event,
	feed: LogSubscription,
	sink: mpsc::Sender<E>,
	mut quit: oneshot::Receiver<()>,
) -> Result<(), ContractError> {
	let LogSubscription { mut logs, mut subscription } = feed;
	let mut upstream_open = true;

	let result = 'events: loop {
		let log = tokio::select! {
			biased;
			_ = &mut quit => break Ok(()),
			error = subscription.err(), if upstream_open => match error {
				Some(e) => break Err(e),
				None => {
					upstream_open = false;
					continue
				},
			},
			log = logs.recv() => match log {
				Some(log) => log,
				// The producer may still be about to report why the feed ended.
				None => break tokio::select! {
					biased;
					_ = &mut quit => Ok(()),
					error = subscription.err() => error.map_or(Ok(()), Err),
				},
			},
		};

		let decoded = match decode_log::<E>(event, log) {
			Ok(decoded) => decoded,
			Err(e) => break Err(e),
		};

		let permit = loop {
			tokio::select! {
				biased;
				_ = &mut quit => break 'events Ok(()),
				error = subscription.err(), if upstream_open => match error {
					Some(e) => break 'events Err(e),
					None => upstream_open = false,
				},
				permit = sink.reserve() => match permit {
					Ok(permit) => break permit,
					Err(_) => break 'events Err(ContractError::SinkClosed),
				},
			}
		};
		permit.send(decoded);
	};

	subscription.unsubscribe().await;
	match &result {
		Ok(()) => debug!(message = "Event watch stopped", event = E::NAME),
		Err(e) => error!(message = "Event watch failed", event = E::NAME, error = %e),
	}
	result
}
