use std::sync::Arc;

use dcn_primitives::types::{
	Address,
	Bytes,
	Expiry,
	InterfaceId,
	PrivilegeId,
	Role,
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
use web3::{
	contract::{
		tokens::Tokenizable,
		Error,
	},
	types::Log,
};

use super::BoundContract;
use crate::{
	contracts::ContractIdentifier,
	errors::ContractDefError,
	events::{
		Approval,
		ApprovalForAll,
		PrivilegeAssigned,
		PrivilegeCloned,
		PrivilegeTotalChanged,
		PrivilegeTransfer,
		RoleAdminChanged,
		RoleGranted,
		RoleRevoked,
		Transfer,
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

/// One entry of a `batchSetPrivileges` call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrivilegeRecord {
	pub token_id: TokenId,
	pub privilege_id: PrivilegeId,
	pub user: Address,
	pub expires: Expiry,
}

impl Tokenizable for PrivilegeRecord {
	fn from_token(token: Token) -> std::result::Result<Self, Error> {
		let fields = match token {
			Token::Tuple(fields) => fields,
			other =>
				return Err(Error::InvalidOutputType(format!(
					"Expected a privilege record tuple, got {:?}",
					other
				))),
		};
		let [token_id, privilege_id, user, expires]: [Token; 4] =
			fields.try_into().map_err(|fields: Vec<Token>| {
				Error::InvalidOutputType(format!(
					"Expected 4 privilege record fields, got {}",
					fields.len()
				))
			})?;

		Ok(Self {
			token_id: TokenId::from_token(token_id)?,
			privilege_id: PrivilegeId::from_token(privilege_id)?,
			user: Address::from_token(user)?,
			expires: Expiry::from_token(expires)?,
		})
	}

	fn into_token(self) -> Token {
		Token::Tuple(vec![
			self.token_id.into_token(),
			self.privilege_id.into_token(),
			self.user.into_token(),
			self.expires.into_token(),
		])
	}
}

/// Client of a deployed `MultiPrivilege`, an ERC-721 token whose holders assign time-limited
/// privileges to other users.
#[derive(Deref)]
pub struct MultiPrivilege<T> {
	contract: BoundContract<T>,
}

impl<T> Clone for MultiPrivilege<T> {
	fn clone(&self) -> Self {
		Self { contract: self.contract.clone() }
	}
}

impl<T> MultiPrivilege<T> {
	pub fn new(
		address: Address,
		transport: Arc<T>,
	) -> std::result::Result<Self, ContractDefError> {
		let abi = ContractIdentifier::MultiPrivilege.abi()?;
		debug!(
			message = "Bound contract",
			contract = %ContractIdentifier::MultiPrivilege,
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

	pub fn parse_privilege_assigned(&self, log: Log) -> Result<PrivilegeAssigned> {
		self.contract.parse_event(log)
	}

	pub fn parse_privilege_cloned(&self, log: Log) -> Result<PrivilegeCloned> {
		self.contract.parse_event(log)
	}

	pub fn parse_privilege_total_changed(&self, log: Log) -> Result<PrivilegeTotalChanged> {
		self.contract.parse_event(log)
	}

	pub fn parse_privilege_transfer(&self, log: Log) -> Result<PrivilegeTransfer> {
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
}

impl<T: Caller> MultiPrivilege<T> {
	/// Number of tokens held by `owner`.
	pub async fn balance_of(&self, owner: Address, opts: CallOptions) -> Result<U256> {
		self.contract.call("balanceOf", (owner,), opts).await
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

	/// Whether `user` currently holds `privilege_id` of `token_id`.
	pub async fn has_privilege(
		&self,
		token_id: TokenId,
		privilege_id: PrivilegeId,
		user: Address,
		opts: CallOptions,
	) -> Result<bool> {
		self.contract.call("hasPrivilege", (token_id, privilege_id, user), opts).await
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

	pub async fn minter_role(&self, opts: CallOptions) -> Result<Role> {
		self.contract.call("MINTER_ROLE", (), opts).await
	}

	/// Collection name.
	pub async fn name(&self, opts: CallOptions) -> Result<String> {
		self.contract.call("name", (), opts).await
	}

	/// Owner of `token_id`. Reverts for unknown tokens.
	pub async fn owner_of(&self, token_id: TokenId, opts: CallOptions) -> Result<Address> {
		self.contract.call("ownerOf", (token_id,), opts).await
	}

	pub async fn privilege_expires(
		&self,
		token_id: TokenId,
		privilege_id: PrivilegeId,
		opts: CallOptions,
	) -> Result<Expiry> {
		self.contract.call("privilegeExpires", (token_id, privilege_id), opts).await
	}

	/// Holder and expiry of a privilege slot.
	pub async fn privilege_of(
		&self,
		token_id: TokenId,
		privilege_id: PrivilegeId,
		opts: CallOptions,
	) -> Result<(Address, Expiry)> {
		self.contract.call("privilegeOf", (token_id, privilege_id), opts).await
	}

	/// Number of privilege slots of every token.
	pub async fn privilege_total(&self, opts: CallOptions) -> Result<U256> {
		self.contract.call("privilegeTotal", (), opts).await
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

	pub async fn total_supply(&self, opts: CallOptions) -> Result<U256> {
		self.contract.call("totalSupply", (), opts).await
	}
}

impl<T: Transactor> MultiPrivilege<T> {
	pub async fn approve(
		&self,
		to: Address,
		token_id: TokenId,
		opts: TransactOptions,
	) -> Result<PendingTransaction> {
		self.contract.transact("approve", (to, token_id), opts).await
	}

	/// Assigns several privileges in one transaction.
	pub async fn batch_set_privileges(
		&self,
		privileges: Vec<PrivilegeRecord>,
		opts: TransactOptions,
	) -> Result<PendingTransaction> {
		let records = privileges.into_iter().map(Tokenizable::into_token).collect();
		self.contract.transact("batchSetPrivileges", (Token::Array(records),), opts).await
	}

	/// Copies a privilege held by the sender to `referrer`.
	pub async fn clone_privilege(
		&self,
		token_id: TokenId,
		privilege_id: PrivilegeId,
		referrer: Address,
		opts: TransactOptions,
	) -> Result<PendingTransaction> {
		self.contract.transact("clonePrivilege", (token_id, privilege_id, referrer), opts).await
	}

	pub async fn grant_role(
		&self,
		role: Role,
		account: Address,
		opts: TransactOptions,
	) -> Result<PendingTransaction> {
		self.contract.transact("grantRole", (role, account), opts).await
	}

	/// Mints a new token to `to`. Minter only.
	pub async fn mint(&self, to: Address, opts: TransactOptions) -> Result<PendingTransaction> {
		self.contract.transact("mint", (to,), opts).await
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

	/// Assigns `privilege_id` of `token_id` to `user` until `expires`.
	pub async fn set_privilege(
		&self,
		token_id: TokenId,
		privilege_id: PrivilegeId,
		user: Address,
		expires: Expiry,
		opts: TransactOptions,
	) -> Result<PendingTransaction> {
		self.contract.transact("setPrivilege", (token_id, privilege_id, user, expires), opts).await
	}

	pub async fn set_privilege_total(
		&self,
		total: U256,
		opts: TransactOptions,
	) -> Result<PendingTransaction> {
		self.contract.transact("setPrivilegeTotal", (total,), opts).await
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
}

impl<T: Filterer> MultiPrivilege<T> {
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

	pub async fn filter_privilege_assigned(
		&self,
		token_id: Vec<TokenId>,
		privilege_id: Vec<PrivilegeId>,
		user: Vec<Address>,
		opts: FilterOptions,
	) -> Result<LogIterator<PrivilegeAssigned>> {
		let topics = indexed(topic(token_id), topic(privilege_id), topic(user));
		self.contract.filter_events(topics, opts).await
	}

	pub async fn watch_privilege_assigned(
		&self,
		sink: mpsc::Sender<PrivilegeAssigned>,
		token_id: Vec<TokenId>,
		privilege_id: Vec<PrivilegeId>,
		user: Vec<Address>,
		opts: WatchOptions,
	) -> Result<Subscription> {
		let topics = indexed(topic(token_id), topic(privilege_id), topic(user));
		self.contract.watch_events(sink, topics, opts).await
	}

	pub async fn filter_privilege_cloned(
		&self,
		token_id: Vec<TokenId>,
		privilege_id: Vec<PrivilegeId>,
		from: Vec<Address>,
		opts: FilterOptions,
	) -> Result<LogIterator<PrivilegeCloned>> {
		let topics = indexed(topic(token_id), topic(privilege_id), topic(from));
		self.contract.filter_events(topics, opts).await
	}

	pub async fn watch_privilege_cloned(
		&self,
		sink: mpsc::Sender<PrivilegeCloned>,
		token_id: Vec<TokenId>,
		privilege_id: Vec<PrivilegeId>,
		from: Vec<Address>,
		opts: WatchOptions,
	) -> Result<Subscription> {
		let topics = indexed(topic(token_id), topic(privilege_id), topic(from));
		self.contract.watch_events(sink, topics, opts).await
	}

	pub async fn filter_privilege_total_changed(
		&self,
		opts: FilterOptions,
	) -> Result<LogIterator<PrivilegeTotalChanged>> {
		self.contract.filter_events(RawTopicFilter::default(), opts).await
	}

	pub async fn watch_privilege_total_changed(
		&self,
		sink: mpsc::Sender<PrivilegeTotalChanged>,
		opts: WatchOptions,
	) -> Result<Subscription> {
		self.contract.watch_events(sink, RawTopicFilter::default(), opts).await
	}

	pub async fn filter_privilege_transfer(
		&self,
		token_id: Vec<TokenId>,
		privilege_id: Vec<PrivilegeId>,
		opts: FilterOptions,
	) -> Result<LogIterator<PrivilegeTransfer>> {
		let topics = indexed(topic(token_id), topic(privilege_id), Topic::Any);
		self.contract.filter_events(topics, opts).await
	}

	pub async fn watch_privilege_transfer(
		&self,
		sink: mpsc::Sender<PrivilegeTransfer>,
		token_id: Vec<TokenId>,
		privilege_id: Vec<PrivilegeId>,
		opts: WatchOptions,
	) -> Result<Subscription> {
		let topics = indexed(topic(token_id), topic(privilege_id), Topic::Any);
		self.contract.watch_events(sink, topics, opts).await
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
}
