use std::sync::Arc;

use dcn_primitives::types::{
	Address,
	Bytes,
	Expiry,
	InterfaceId,
	Node,
	Role,
	Seconds,
	TokenId,
	U256,
};
use derive_more::Deref;
use ethabi::{
	RawTopicFilter,
	Token,
	Topic,
};
use tokio::sync::mpsc;
use tracing::debug;
use web3::types::Log;

use super::BoundContract;
use crate::{
	contracts::ContractIdentifier,
	errors::ContractDefError,
	events::{
		Approval,
		ApprovalForAll,
		BaseUriChanged,
		NameRegistered,
		NameRenewed,
		Paused,
		RoleAdminChanged,
		RoleGranted,
		RoleRevoked,
		Transfer,
		Unpaused,
	},
	filters::{
		indexed,
		topic,
	},
	iterator::LogIterator,
	subscription::Subscription,
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
};

/// Client of a deployed `DcnRegistry`, the ERC-721 registry of DCN names.
///
/// Names are tokens whose id is the keccak-256 hash of the label, see
/// [`dcn_primitives::hashing::label_hash`].
#[derive(Deref)]
pub struct DcnRegistry<T> {
	contract: BoundContract<T>,
}

impl<T> Clone for DcnRegistry<T> {
	fn clone(&self) -> Self {
		Self { contract: self.contract.clone() }
	}
}

impl<T> DcnRegistry<T> {
	pub fn new(
		address: Address,
		transport: Arc<T>,
	) -> std::result::Result<Self, ContractDefError> {
		let abi = ContractIdentifier::DcnRegistry.abi()?;
		debug!(
			message = "Bound contract",
			contract = %ContractIdentifier::DcnRegistry,
			address = format!("{:#x}", address)
		);
		Ok(Self { contract: BoundContract::new(address, abi, transport) })
	}

	pub fn parse_approval(&self, log: Log) -> Result<Approval> {
		self.contract.parse_event(log)
	}

	pub fn parse_approval_for_all(&self, log: Log) -> Result<ApprovalForAll> {
		self.contract.parse_event(log)
	}

	pub fn parse_base_uri_changed(&self, log: Log) -> Result<BaseUriChanged> {
		self.contract.parse_event(log)
	}

	pub fn parse_name_registered(&self, log: Log) -> Result<NameRegistered> {
		self.contract.parse_event(log)
	}

	pub fn parse_name_renewed(&self, log: Log) -> Result<NameRenewed> {
		self.contract.parse_event(log)
	}

	pub fn parse_paused(&self, log: Log) -> Result<Paused> {
		self.contract.parse_event(log)
	}

	pub fn parse_role_admin_changed(&self, log: Log) -> Result<RoleAdminChanged> {
		self.contract.parse_event(log)
	}

	pub fn parse_role_granted(&self, log: Log) -> Result<RoleGranted> {
		self.contract.parse_event(log)
	}

	pub fn parse_role_revoked(&self, log: Log) -> Result<RoleRevoked> {
		self.contract.parse_event(log)
	}

	pub fn parse_transfer(&self, log: Log) -> Result<Transfer> {
		self.contract.parse_event(log)
	}

	pub fn parse_unpaused(&self, log: Log) -> Result<Unpaused> {
		self.contract.parse_event(log)
	}
}

impl<T: Caller> DcnRegistry<T> {
	/// Whether the name `id` can be registered. Expired names become available after the grace
	/// period.
	pub async fn available(&self, id: TokenId, opts: CallOptions) -> Result<bool> {
		self.contract.call("available", (id,), opts).await
	}

	/// Number of tokens held by `owner`.
	pub async fn balance_of(&self, owner: Address, opts: CallOptions) -> Result<U256> {
		self.contract.call("balanceOf", (owner,), opts).await
	}

	/// Namehash of the node all names are registered under.
	pub async fn base_node(&self, opts: CallOptions) -> Result<Node> {
		self.contract.call("baseNode", (), opts).await
	}

	pub async fn default_admin_role(&self, opts: CallOptions) -> Result<Role> {
		self.contract.call("DEFAULT_ADMIN_ROLE", (), opts).await
	}

	/// Account approved to manage `token_id`, zero when none.
	pub async fn get_approved(&self, token_id: TokenId, opts: CallOptions) -> Result<Address> {
		self.contract.call("getApproved", (token_id,), opts).await
	}

	/// Role allowed to grant and revoke `role`.
	pub async fn get_role_admin(&self, role: Role, opts: CallOptions) -> Result<Role> {
		self.contract.call("getRoleAdmin", (role,), opts).await
	}

	/// Seconds an expired name stays reserved for its last owner.
	pub async fn grace_period(&self, opts: CallOptions) -> Result<Seconds> {
		self.contract.call("GRACE_PERIOD", (), opts).await
	}

	pub async fn has_role(&self, role: Role, account: Address, opts: CallOptions) -> Result<bool> {
		self.contract.call("hasRole", (role, account), opts).await
	}

	pub async fn is_approved_for_all(
		&self,
		owner: Address,
		operator: Address,
		opts: CallOptions,
	) -> Result<bool> {
		self.contract.call("isApprovedForAll", (owner, operator), opts).await
	}

	/// Collection name.
	pub async fn name(&self, opts: CallOptions) -> Result<String> {
		self.contract.call("name", (), opts).await
	}

	/// Expiry timestamp of the name `id`.
	pub async fn name_expires(&self, id: TokenId, opts: CallOptions) -> Result<Expiry> {
		self.contract.call("nameExpires", (id,), opts).await
	}

	/// Label registered for `id`.
	pub async fn name_of(&self, id: TokenId, opts: CallOptions) -> Result<String> {
		self.contract.call("nameOf", (id,), opts).await
	}

	/// Owner of `token_id`. Reverts for unknown tokens.
	pub async fn owner_of(&self, token_id: TokenId, opts: CallOptions) -> Result<Address> {
		self.contract.call("ownerOf", (token_id,), opts).await
	}

	pub async fn paused(&self, opts: CallOptions) -> Result<bool> {
		self.contract.call("paused", (), opts).await
	}

	pub async fn registrar_role(&self, opts: CallOptions) -> Result<Role> {
		self.contract.call("REGISTRAR_ROLE", (), opts).await
	}

	/// ERC-165 interface detection.
	pub async fn supports_interface(
		&self,
		interface_id: InterfaceId,
		opts: CallOptions,
	) -> Result<bool> {
		self.contract
			.call("supportsInterface", (Token::FixedBytes(interface_id.to_vec()),), opts)
			.await
	}

	pub async fn symbol(&self, opts: CallOptions) -> Result<String> {
		self.contract.call("symbol", (), opts).await
	}

	/// Metadata URI of `token_id`.
	pub async fn token_uri(&self, token_id: TokenId, opts: CallOptions) -> Result<String> {
		self.contract.call("tokenURI", (token_id,), opts).await
	}
}

impl<T: Transactor> DcnRegistry<T> {
	pub async fn approve(
		&self,
		to: Address,
		token_id: TokenId,
		opts: TransactOptions,
	) -> Result<PendingTransaction> {
		self.contract.transact("approve", (to, token_id), opts).await
	}

	pub async fn grant_role(
		&self,
		role: Role,
		account: Address,
		opts: TransactOptions,
	) -> Result<PendingTransaction> {
		self.contract.transact("grantRole", (role, account), opts).await
	}

	pub async fn pause(&self, opts: TransactOptions) -> Result<PendingTransaction> {
		self.contract.transact("pause", (), opts).await
	}

	/// Hands the token of an expired name back to `owner`.
	pub async fn reclaim(
		&self,
		id: TokenId,
		owner: Address,
		opts: TransactOptions,
	) -> Result<PendingTransaction> {
		self.contract.transact("reclaim", (id, owner), opts).await
	}

	/// Registers the label `name` for `owner` during `duration` seconds. Registrar only.
	pub async fn register(
		&self,
		name: String,
		owner: Address,
		duration: Seconds,
		opts: TransactOptions,
	) -> Result<PendingTransaction> {
		self.contract.transact("register", (name, owner, duration), opts).await
	}

	/// Extends the registration of `id` by `duration` seconds. Registrar only.
	pub async fn renew(
		&self,
		id: TokenId,
		duration: Seconds,
		opts: TransactOptions,
	) -> Result<PendingTransaction> {
		self.contract.transact("renew", (id, duration), opts).await
	}

	/// Drops `role` from the sender, `account` must be the sender.
	pub async fn renounce_role(
		&self,
		role: Role,
		account: Address,
		opts: TransactOptions,
	) -> Result<PendingTransaction> {
		self.contract.transact("renounceRole", (role, account), opts).await
	}

	pub async fn revoke_role(
		&self,
		role: Role,
		account: Address,
		opts: TransactOptions,
	) -> Result<PendingTransaction> {
		self.contract.transact("revokeRole", (role, account), opts).await
	}

	pub async fn safe_transfer_from(
		&self,
		from: Address,
		to: Address,
		token_id: TokenId,
		opts: TransactOptions,
	) -> Result<PendingTransaction> {
		self.contract.transact("safeTransferFrom", (from, to, token_id), opts).await
	}

	/// `safeTransferFrom` overload forwarding `data` to the receiver hook.
	pub async fn safe_transfer_from_with_data(
		&self,
		from: Address,
		to: Address,
		token_id: TokenId,
		data: Bytes,
		opts: TransactOptions,
	) -> Result<PendingTransaction> {
		self.contract
			.transact("safeTransferFrom", (from, to, token_id, Token::Bytes(data.0)), opts)
			.await
	}

	pub async fn set_approval_for_all(
		&self,
		operator: Address,
		approved: bool,
		opts: TransactOptions,
	) -> Result<PendingTransaction> {
		self.contract.transact("setApprovalForAll", (operator, approved), opts).await
	}

	pub async fn set_base_uri(
		&self,
		base_uri: String,
		opts: TransactOptions,
	) -> Result<PendingTransaction> {
		self.contract.transact("setBaseURI", (base_uri,), opts).await
	}

	pub async fn transfer_from(
		&self,
		from: Address,
		to: Address,
		token_id: TokenId,
		opts: TransactOptions,
	) -> Result<PendingTransaction> {
		self.contract.transact("transferFrom", (from, to, token_id), opts).await
	}

	pub async fn unpause(&self, opts: TransactOptions) -> Result<PendingTransaction> {
		self.contract.transact("unpause", (), opts).await
	}
}

impl<T: Filterer> DcnRegistry<T> {
	pub async fn filter_approval(
		&self,
		owner: Vec<Address>,
		approved: Vec<Address>,
		token_id: Vec<TokenId>,
		opts: FilterOptions,
	) -> Result<LogIterator<Approval>> {
		let topics = indexed(topic(owner), topic(approved), topic(token_id));
		self.contract.filter_events(topics, opts).await
	}

	pub async fn watch_approval(
		&self,
		sink: mpsc::Sender<Approval>,
		owner: Vec<Address>,
		approved: Vec<Address>,
		token_id: Vec<TokenId>,
		opts: WatchOptions,
	) -> Result<Subscription> {
		let topics = indexed(topic(owner), topic(approved), topic(token_id));
		self.contract.watch_events(sink, topics, opts).await
	}

	pub async fn filter_approval_for_all(
		&self,
		owner: Vec<Address>,
		operator: Vec<Address>,
		opts: FilterOptions,
	) -> Result<LogIterator<ApprovalForAll>> {
		let topics = indexed(topic(owner), topic(operator), Topic::Any);
		self.contract.filter_events(topics, opts).await
	}

	pub async fn watch_approval_for_all(
		&self,
		sink: mpsc::Sender<ApprovalForAll>,
		owner: Vec<Address>,
		operator: Vec<Address>,
		opts: WatchOptions,
	) -> Result<Subscription> {
		let topics = indexed(topic(owner), topic(operator), Topic::Any);
		self.contract.watch_events(sink, topics, opts).await
	}

	pub async fn filter_base_uri_changed(
		&self,
		opts: FilterOptions,
	) -> Result<LogIterator<BaseUriChanged>> {
		self.contract.filter_events(RawTopicFilter::default(), opts).await
	}

	pub async fn watch_base_uri_changed(
		&self,
		sink: mpsc::Sender<BaseUriChanged>,
		opts: WatchOptions,
	) -> Result<Subscription> {
		self.contract.watch_events(sink, RawTopicFilter::default(), opts).await
	}

	pub async fn filter_name_registered(
		&self,
		id: Vec<TokenId>,
		owner: Vec<Address>,
		opts: FilterOptions,
	) -> Result<LogIterator<NameRegistered>> {
		let topics = indexed(topic(id), topic(owner), Topic::Any);
		self.contract.filter_events(topics, opts).await
	}

	pub async fn watch_name_registered(
		&self,
		sink: mpsc::Sender<NameRegistered>,
		id: Vec<TokenId>,
		owner: Vec<Address>,
		opts: WatchOptions,
	) -> Result<Subscription> {
		let topics = indexed(topic(id), topic(owner), Topic::Any);
		self.contract.watch_events(sink, topics, opts).await
	}

	pub async fn filter_name_renewed(
		&self,
		id: Vec<TokenId>,
		opts: FilterOptions,
	) -> Result<LogIterator<NameRenewed>> {
		let topics = indexed(topic(id), Topic::Any, Topic::Any);
		self.contract.filter_events(topics, opts).await
	}

	pub async fn watch_name_renewed(
		&self,
		sink: mpsc::Sender<NameRenewed>,
		id: Vec<TokenId>,
		opts: WatchOptions,
	) -> Result<Subscription> {
		let topics = indexed(topic(id), Topic::Any, Topic::Any);
		self.contract.watch_events(sink, topics, opts).await
	}

	pub async fn filter_paused(&self, opts: FilterOptions) -> Result<LogIterator<Paused>> {
		self.contract.filter_events(RawTopicFilter::default(), opts).await
	}

	pub async fn watch_paused(
		&self,
		sink: mpsc::Sender<Paused>,
		opts: WatchOptions,
	) -> Result<Subscription> {
		self.contract.watch_events(sink, RawTopicFilter::default(), opts).await
	}

	pub async fn filter_role_admin_changed(
		&self,
		role: Vec<Role>,
		previous_admin_role: Vec<Role>,
		new_admin_role: Vec<Role>,
		opts: FilterOptions,
	) -> Result<LogIterator<RoleAdminChanged>> {
		let topics = indexed(topic(role), topic(previous_admin_role), topic(new_admin_role));
		self.contract.filter_events(topics, opts).await
	}

	pub async fn watch_role_admin_changed(
		&self,
		sink: mpsc::Sender<RoleAdminChanged>,
		role: Vec<Role>,
		previous_admin_role: Vec<Role>,
		new_admin_role: Vec<Role>,
		opts: WatchOptions,
	) -> Result<Subscription> {
		let topics = indexed(topic(role), topic(previous_admin_role), topic(new_admin_role));
		self.contract.watch_events(sink, topics, opts).await
	}

	pub async fn filter_role_granted(
		&self,
		role: Vec<Role>,
		account: Vec<Address>,
		sender: Vec<Address>,
		opts: FilterOptions,
	) -> Result<LogIterator<RoleGranted>> {
		let topics = indexed(topic(role), topic(account), topic(sender));
		self.contract.filter_events(topics, opts).await
	}

	pub async fn watch_role_granted(
		&self,
		sink: mpsc::Sender<RoleGranted>,
		role: Vec<Role>,
		account: Vec<Address>,
		sender: Vec<Address>,
		opts: WatchOptions,
	) -> Result<Subscription> {
		let topics = indexed(topic(role), topic(account), topic(sender));
		self.contract.watch_events(sink, topics, opts).await
	}

	pub async fn filter_role_revoked(
		&self,
		role: Vec<Role>,
		account: Vec<Address>,
		sender: Vec<Address>,
		opts: FilterOptions,
	) -> Result<LogIterator<RoleRevoked>> {
		let topics = indexed(topic(role), topic(account), topic(sender));
		self.contract.filter_events(topics, opts).await
	}

	pub async fn watch_role_revoked(
		&self,
		sink: mpsc::Sender<RoleRevoked>,
		role: Vec<Role>,
		account: Vec<Address>,
		sender: Vec<Address>,
		opts: WatchOptions,
	) -> Result<Subscription> {
		let topics = indexed(topic(role), topic(account), topic(sender));
		self.contract.watch_events(sink, topics, opts).await
	}

	pub async fn filter_transfer(
		&self,
		from: Vec<Address>,
		to: Vec<Address>,
		token_id: Vec<TokenId>,
		opts: FilterOptions,
	) -> Result<LogIterator<Transfer>> {
		let topics = indexed(topic(from), topic(to), topic(token_id));
		self.contract.filter_events(topics, opts).await
	}

	pub async fn watch_transfer(
		&self,
		sink: mpsc::Sender<Transfer>,
		from: Vec<Address>,
		to: Vec<Address>,
		token_id: Vec<TokenId>,
		opts: WatchOptions,
	) -> Result<Subscription> {
		let topics = indexed(topic(from), topic(to), topic(token_id));
		self.contract.watch_events(sink, topics, opts).await
	}

	pub async fn filter_unpaused(&self, opts: FilterOptions) -> Result<LogIterator<Unpaused>> {
		self.contract.filter_events(RawTopicFilter::default(), opts).await
	}

	pub async fn watch_unpaused(
		&self,
		sink: mpsc::Sender<Unpaused>,
		opts: WatchOptions,
	) -> Result<Subscription> {
		self.contract.watch_events(sink, RawTopicFilter::default(), opts).await
	}
}
