use dcn_primitives::types::{
	Address,
	BlockNumber,
};
use ethabi::{
	RawTopicFilter,
	Token,
	Topic,
};
use web3::{
	contract::tokens::Tokenizable,
	types::{
		Filter,
		FilterBuilder,
	},
};

use crate::errors::ContractError;

/// Converts the accepted values of an indexed parameter into a topic.
///
/// No values match anything, a single value matches exactly and several values match any of
/// them.
pub fn topic<T: Tokenizable>(values: Vec<T>) -> Topic<Token> {
	let mut tokens: Vec<Token> = values.into_iter().map(Tokenizable::into_token).collect();
	match tokens.len() {
		0 => Topic::Any,
		1 => Topic::This(tokens.remove(0)),
		_ => Topic::OneOf(tokens),
	}
}

/// Topic filter over the first three indexed parameters of an event.
pub fn indexed(
	topic0: Topic<Token>,
	topic1: Topic<Token>,
	topic2: Topic<Token>,
) -> RawTopicFilter {
	RawTopicFilter { topic0, topic1, topic2 }
}

/// Builds the log filter for `event` emitted by the contract at `address`.
pub fn event_filter(
	address: Address,
	event: &ethabi::Event,
	topics: RawTopicFilter,
	from_block: Option<BlockNumber>,
	to_block: Option<BlockNumber>,
) -> Result<Filter, ContractError> {
	let topic_filter = event.filter(topics)?;

	let mut builder = FilterBuilder::default().address(vec![address]).topic_filter(topic_filter);
	if let Some(from_block) = from_block {
		builder = builder.from_block(from_block.into());
	}
	if let Some(to_block) = to_block {
		builder = builder.to_block(to_block.into());
	}
	Ok(builder.build())
}
