use dcn_bindings::{
	events::Transfer,
	keys::PrivateKey,
	proxies::{
		DcnRegistry,
		MultiPrivilege,
	},
	transport::{
		CallOptions,
		FilterOptions,
		PendingTransaction,
		TransactOptions,
		WatchOptions,
	},
};
use dcn_primitives::{
	constants::DEFAULT_LOG_BUFFER,
	hashing::label_hash,
	types::{
		Address,
		BlockNumber,
		U256,
	},
};
use tokio::sync::mpsc;
use tracing::info;
use web3::{
	signing::Key,
	transports::Http,
};

use crate::{
	accounts::load_signer,
	Context,
};

type Result<T> = std::result::Result<T, String>;

fn registry(context: &Context) -> Result<DcnRegistry<web3::Web3<Http>>> {
	let address = context.registry_address.ok_or("--registry-address is required")?;
	DcnRegistry::new(address, context.web3.clone()).map_err(|e| e.to_string())
}

fn privilege(context: &Context) -> Result<MultiPrivilege<web3::Web3<Http>>> {
	let address = context.privilege_address.ok_or("--privilege-address is required")?;
	MultiPrivilege::new(address, context.web3.clone()).map_err(|e| e.to_string())
}

fn signer(context: &Context) -> Result<PrivateKey> {
	let keystore_path = context.keystore_path.as_ref().ok_or("--keystore-path is required")?;
	let signer =
		load_signer(keystore_path, context.address, context.password_file.as_deref())?;
	info!(message = "Unlocked signing key", address = format!("{:#x}", signer.address()));
	Ok(signer)
}

fn report(pending: PendingTransaction) {
	println!("Transaction sent: {:#x}", pending.hash);
}

pub async fn name_info(context: &Context, name: &str) -> Result<()> {
	let registry = registry(context)?;
	let id = label_hash(name);
	let opts = CallOptions::default();

	println!("Name: {}", name);
	println!("Token id: {}", id);

	let available =
		registry.available(id, opts.clone()).await.map_err(|e| e.to_string())?;
	println!("Available: {}", available);

	let expires = registry.name_expires(id, opts.clone()).await.map_err(|e| e.to_string())?;
	if expires.is_zero() {
		println!("Never registered");
		return Ok(())
	}
	println!("Expires: {}", expires);

	match registry.owner_of(id, opts).await {
		Ok(owner) => println!("Owner: {:#x}", owner),
		Err(e) => println!("Owner: unknown ({})", e),
	}
	Ok(())
}

pub async fn privilege_info(
	context: &Context,
	token_id: U256,
	privilege_id: U256,
	user: Option<Address>,
) -> Result<()> {
	let privilege = privilege(context)?;
	let opts = CallOptions::default();

	let total = privilege.privilege_total(opts.clone()).await.map_err(|e| e.to_string())?;
	if privilege_id >= total {
		return Err(format!("Privilege id {} out of range, tokens carry {}", privilege_id, total))
	}

	let (holder, expires) = privilege
		.privilege_of(token_id, privilege_id, opts.clone())
		.await
		.map_err(|e| e.to_string())?;
	println!("Holder: {:#x}", holder);
	println!("Expires: {}", expires);

	if let Some(user) = user {
		let holds = privilege
			.has_privilege(token_id, privilege_id, user, opts)
			.await
			.map_err(|e| e.to_string())?;
		println!("{:#x} holds privilege: {}", user, holds);
	}
	Ok(())
}

pub async fn register(
	context: &Context,
	name: String,
	owner: Address,
	duration: U256,
) -> Result<()> {
	let registry = registry(context)?;
	let signer = signer(context)?;

	let id = label_hash(&name);
	let available =
		registry.available(id, CallOptions::default()).await.map_err(|e| e.to_string())?;
	if !available {
		return Err(format!("Name `{}` is not available", name))
	}

	let pending = registry
		.register(name, owner, duration, TransactOptions::signed(signer))
		.await
		.map_err(|e| format!("Error registering name: {}", e))?;
	report(pending);
	Ok(())
}

pub async fn set_privilege(
	context: &Context,
	token_id: U256,
	privilege_id: U256,
	user: Address,
	expires: U256,
) -> Result<()> {
	let privilege = privilege(context)?;
	let signer = signer(context)?;

	let pending = privilege
		.set_privilege(token_id, privilege_id, user, expires, TransactOptions::signed(signer))
		.await
		.map_err(|e| format!("Error setting privilege: {}", e))?;
	report(pending);
	Ok(())
}

pub async fn events(
	context: &Context,
	from_block: Option<BlockNumber>,
	to_block: Option<BlockNumber>,
) -> Result<()> {
	let opts = FilterOptions { from_block, to_block };
	if context.registry_address.is_none() && context.privilege_address.is_none() {
		return Err("--registry-address or --privilege-address is required".to_owned())
	}

	if context.registry_address.is_some() {
		let mut registrations = registry(context)?
			.filter_name_registered(vec![], vec![], opts.clone())
			.await
			.map_err(|e| e.to_string())?;
		while registrations.next().await {
			if let Some(event) = registrations.event() {
				println!(
					"NameRegistered name={} owner={:#x} expires={} block={:?}",
					event.name, event.owner, event.expires, event.raw.block_number
				);
			}
		}
		if let Some(e) = registrations.error() {
			return Err(format!("Error reading registrations: {}", e))
		}
	}

	if context.privilege_address.is_some() {
		let mut assignments = privilege(context)?
			.filter_privilege_assigned(vec![], vec![], vec![], opts)
			.await
			.map_err(|e| e.to_string())?;
		while assignments.next().await {
			if let Some(event) = assignments.event() {
				println!(
					"PrivilegeAssigned token={} privilege={} user={:#x} expires={} block={:?}",
					event.token_id,
					event.privilege_id,
					event.user,
					event.expires,
					event.raw.block_number
				);
			}
		}
		if let Some(e) = assignments.error() {
			return Err(format!("Error reading privilege assignments: {}", e))
		}
	}
	Ok(())
}

fn print_transfer(contract: &str, event: &Transfer) {
	println!(
		"{} Transfer from={:#x} to={:#x} token={} block={:?}",
		contract, event.from, event.to, event.token_id, event.raw.block_number
	);
}

pub async fn watch(context: &Context, from_block: Option<BlockNumber>) -> Result<()> {
	let registry = context.registry_address.map(|_| registry(context)).transpose()?;
	let privilege = context.privilege_address.map(|_| privilege(context)).transpose()?;
	if registry.is_none() && privilege.is_none() {
		return Err("--registry-address or --privilege-address is required".to_owned())
	}

	let opts =
		WatchOptions { from_block, poll_interval: context.poll_interval, ..Default::default() };
	let (registry_sink, mut registry_transfers) = mpsc::channel(DEFAULT_LOG_BUFFER);
	let (privilege_sink, mut privilege_transfers) = mpsc::channel(DEFAULT_LOG_BUFFER);

	let mut subscriptions = vec![];
	if let Some(registry) = &registry {
		let subscription = registry
			.watch_transfer(registry_sink, vec![], vec![], vec![], opts.clone())
			.await
			.map_err(|e| e.to_string())?;
		subscriptions.push(("DcnRegistry", subscription));
	}
	if let Some(privilege) = &privilege {
		let subscription = privilege
			.watch_transfer(privilege_sink, vec![], vec![], vec![], opts)
			.await
			.map_err(|e| e.to_string())?;
		subscriptions.push(("MultiPrivilege", subscription));
	}

	let mut registry_open = registry.is_some();
	let mut privilege_open = privilege.is_some();
	let interrupted = loop {
		if !registry_open && !privilege_open {
			break false
		}
		tokio::select! {
			_ = tokio::signal::ctrl_c() => break true,
			transfer = registry_transfers.recv(), if registry_open => match transfer {
				Some(event) => print_transfer("DcnRegistry", &event),
				None => registry_open = false,
			},
			transfer = privilege_transfers.recv(), if privilege_open => match transfer {
				Some(event) => print_transfer("MultiPrivilege", &event),
				None => privilege_open = false,
			},
		}
	};

	let mut failed = false;
	for (contract, subscription) in subscriptions.iter_mut() {
		if !interrupted {
			if let Some(e) = subscription.err().await {
				eprintln!("{} watch failed: {}", contract, e);
				failed = true;
			}
		}
		subscription.unsubscribe().await;
	}
	if failed {
		return Err("Event watch failed".to_owned())
	}
	Ok(())
}
