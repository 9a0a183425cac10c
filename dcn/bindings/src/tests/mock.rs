use std::{
	collections::{
		HashMap,
		VecDeque,
	},
	sync::Arc,
	time::Duration,
};

use dcn_primitives::types::{
	Address,
	Bytes,
	TransactionHash,
	H256,
	U256,
};
use ethabi::Token;
use ethsign::{
	keyfile::{
		Bytes as KeyBytes,
		Crypto,
	},
	KeyFile,
	SecretKey,
};
use futures::future;
use jsonrpc_core::{
	Call,
	Value,
};
use parking_lot::Mutex;
use serde_json::json;
use tempfile::NamedTempFile;
use tokio::sync::{
	mpsc,
	oneshot,
};
use web3::{
	types::{
		Filter,
		Log,
		TransactionReceipt,
	},
	RequestId,
};

use crate::{
	errors::ContractError,
	events::{
		ContractEvent,
		Transfer,
	},
	proxies::{
		DcnRegistry,
		MultiPrivilege,
	},
	subscription::{
		LogSubscription,
		Subscription,
	},
	transport::{
		CallOptions,
		Caller,
		Filterer,
		Result,
		TransactOptions,
		Transactor,
		WatchOptions,
	},
};

/// Transport answering from canned responses and recording every request.
#[derive(Default)]
pub struct MockTransport {
	pub call_results: Mutex<VecDeque<Result<Bytes>>>,
	pub calls: Mutex<Vec<(Address, Bytes, CallOptions)>>,
	pub transact_results: Mutex<VecDeque<Result<TransactionHash>>>,
	pub transactions: Mutex<Vec<(Address, Bytes, Address)>>,
	pub receipts: Mutex<Vec<TransactionHash>>,
	pub logs: Mutex<Vec<Log>>,
	pub filters: Mutex<Vec<Filter>>,
	pub feeds: Mutex<VecDeque<LogSubscription>>,
}

impl MockTransport {
	pub fn returns(&self, tokens: &[Token]) {
		self.call_results.lock().push_back(Ok(ethabi::encode(tokens).into()));
	}
}

#[async_trait::async_trait]
impl Caller for MockTransport {
	async fn call(&self, to: Address, data: Bytes, opts: CallOptions) -> Result<Bytes> {
		self.calls.lock().push((to, data, opts));
		self.call_results
			.lock()
			.pop_front()
			.unwrap_or(Err(ContractError::Web3(web3::Error::Unreachable)))
	}
}

#[async_trait::async_trait]
impl Transactor for MockTransport {
	async fn transact(
		&self,
		to: Address,
		data: Bytes,
		opts: TransactOptions,
	) -> Result<TransactionHash> {
		self.transactions.lock().push((to, data, opts.from));
		self.transact_results
			.lock()
			.pop_front()
			.unwrap_or(Err(ContractError::Web3(web3::Error::Unreachable)))
	}

	async fn transaction_receipt(
		&self,
		hash: TransactionHash,
	) -> Result<Option<TransactionReceipt>> {
		self.receipts.lock().push(hash);
		Ok(None)
	}
}

#[async_trait::async_trait]
impl Filterer for MockTransport {
	async fn filter_logs(&self, filter: Filter) -> Result<Vec<Log>> {
		self.filters.lock().push(filter);
		Ok(self.logs.lock().clone())
	}

	async fn watch_logs(&self, filter: Filter, _opts: WatchOptions) -> Result<LogSubscription> {
		self.filters.lock().push(filter);
		self.feeds.lock().pop_front().ok_or(ContractError::Web3(web3::Error::Unreachable))
	}
}

/// Test side of a live log feed.
pub struct FeedControl {
	pub logs: mpsc::Sender<Log>,
	failure: Option<oneshot::Sender<ContractError>>,
}

impl FeedControl {
	pub fn fail(&mut self, error: ContractError) {
		if let Some(failure) = self.failure.take() {
			let _ = failure.send(error);
		}
	}
}

/// Live feed that only ends when failed, cancelled or when its control is dropped.
pub fn feed(buffer: usize) -> (LogSubscription, FeedControl) {
	let (logs_tx, logs) = mpsc::channel(buffer);
	let (failure_tx, failure_rx) = oneshot::channel::<ContractError>();

	let subscription = Subscription::spawn(move |quit| async move {
		tokio::select! {
			_ = quit => Ok(()),
			failure = failure_rx => match failure {
				Ok(e) => Err(e),
				Err(_) => Ok(()),
			},
		}
	});

	let control = FeedControl { logs: logs_tx, failure: Some(failure_tx) };
	(LogSubscription { logs, subscription }, control)
}

/// Feed holding `logs` whose log channel closes before the producer fails with `error`.
pub fn closing_feed(logs: Vec<Log>, error: ContractError) -> LogSubscription {
	let (logs_tx, receiver) = mpsc::channel(logs.len().max(1));
	for log in logs {
		logs_tx.try_send(log).expect("buffer fits every log");
	}

	let subscription = Subscription::spawn(move |_quit| async move {
		drop(logs_tx);
		tokio::time::sleep(Duration::from_millis(20)).await;
		Err(error)
	});
	LogSubscription { logs: receiver, subscription }
}

pub fn connection_reset() -> ContractError {
	ContractError::Web3(web3::Error::InvalidResponse("connection reset".to_owned()))
}

pub fn word(value: U256) -> H256 {
	let mut bytes = [0u8; 32];
	value.to_big_endian(&mut bytes);
	H256(bytes)
}

pub fn log(address: Address, topics: Vec<H256>, data: Vec<u8>) -> Log {
	serde_json::from_value(json!({
		"address": address,
		"topics": topics,
		"data": Bytes(data),
	}))
	.expect("Log fixture should deserialize")
}

pub fn transfer_log(contract: Address, from: Address, to: Address, token_id: U256) -> Log {
	log(contract, vec![Transfer::TOPIC, from.into(), to.into(), word(token_id)], vec![])
}

pub fn registry_address() -> Address {
	Address::repeat_byte(0xd1)
}

pub fn privilege_address() -> Address {
	Address::repeat_byte(0xb2)
}

pub fn registry(transport: &Arc<MockTransport>) -> DcnRegistry<MockTransport> {
	DcnRegistry::new(registry_address(), transport.clone()).expect("ABI should load")
}

pub fn privilege(transport: &Arc<MockTransport>) -> MultiPrivilege<MockTransport> {
	MultiPrivilege::new(privilege_address(), transport.clone()).expect("ABI should load")
}

/// `web3` transport answering canned JSON-RPC results and recording every request.
#[derive(Clone, Debug, Default)]
pub struct RecordingTransport {
	requests: Arc<Mutex<Vec<(String, Vec<Value>)>>>,
	queued: Arc<Mutex<HashMap<String, VecDeque<Value>>>>,
	standing: Arc<Mutex<HashMap<String, Value>>>,
}

impl RecordingTransport {
	/// Answers the next `method` request with `result`.
	pub fn respond(&self, method: &str, result: Value) {
		self.queued.lock().entry(method.to_owned()).or_default().push_back(result);
	}

	/// Answers `method` with `result` once its queued answers run out.
	pub fn respond_always(&self, method: &str, result: Value) {
		self.standing.lock().insert(method.to_owned(), result);
	}

	pub fn methods(&self) -> Vec<String> {
		self.requests.lock().iter().map(|(method, _)| method.clone()).collect()
	}

	/// Parameters of the first `method` request.
	pub fn params(&self, method: &str) -> Vec<Value> {
		self.requests
			.lock()
			.iter()
			.find(|(name, _)| name == method)
			.map(|(_, params)| params.clone())
			.unwrap_or_default()
	}

	fn answer(&self, method: &str) -> web3::Result<Value> {
		let queued = self.queued.lock().get_mut(method).and_then(VecDeque::pop_front);
		match queued {
			Some(result) => Ok(result),
			None => self.standing.lock().get(method).cloned().ok_or(web3::Error::Unreachable),
		}
	}
}

impl web3::Transport for RecordingTransport {
	type Out = future::Ready<web3::Result<Value>>;

	fn prepare(&self, method: &str, params: Vec<Value>) -> (RequestId, Call) {
		let mut requests = self.requests.lock();
		requests.push((method.to_owned(), params.clone()));
		let id = requests.len();
		(id, web3::helpers::build_request(id, method, params))
	}

	fn send(&self, _id: RequestId, request: Call) -> Self::Out {
		future::ready(match request {
			Call::MethodCall(call) => self.answer(&call.method),
			_ => Err(web3::Error::Unreachable),
		})
	}
}

pub const KEYSTORE_PASSWORD: &str = "registrar";

/// Keystore file holding `secret`, encrypted with `KEYSTORE_PASSWORD`.
pub fn keystore(secret: &[u8; 32]) -> NamedTempFile {
	let key = SecretKey::from_raw(secret).expect("secret should be a valid key");
	let crypto =
		Crypto::encrypt(secret, &KEYSTORE_PASSWORD.into(), 1024).expect("secret should encrypt");
	let key_file = KeyFile {
		id: "dcn-test-key".to_owned(),
		version: 3,
		crypto,
		address: Some(KeyBytes(key.public().address().to_vec())),
	};

	let file = NamedTempFile::new().expect("temp file should be created");
	serde_json::to_writer(file.as_file(), &key_file).expect("keystore should serialize");
	file
}
