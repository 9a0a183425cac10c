use std::{
	error::Error,
	path::PathBuf,
	process,
	str::FromStr,
	sync::Arc,
	time::Duration,
};

use dcn_primitives::types::{
	Address,
	BlockNumber,
	U256,
};
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;
use web3::{
	transports::Http,
	Web3,
};

mod accounts;
mod commands;

pub fn parse_address(address: &str) -> Result<Address, Box<dyn Error + Send + Sync + 'static>> {
	Ok(Address::from_str(address.trim_start_matches("0x"))?)
}

pub fn parse_u256(value: &str) -> Result<U256, Box<dyn Error + Send + Sync + 'static>> {
	match value.strip_prefix("0x") {
		Some(hex) => Ok(U256::from_str_radix(hex, 16)?),
		None => Ok(U256::from_dec_str(value)?),
	}
}

#[derive(StructOpt, Debug)]
#[structopt(name = "DCN Ops")]
pub struct Opt {
	/// Specify the RPC endpoint to interact with.
	#[structopt(long, required = true, takes_value = true)]
	pub eth_rpc_endpoint: String,

	/// Address of the DcnRegistry contract.
	#[structopt(long, parse(try_from_str = parse_address), takes_value = true)]
	pub registry_address: Option<Address>,

	/// Address of the MultiPrivilege contract.
	#[structopt(long, parse(try_from_str = parse_address), takes_value = true)]
	pub privilege_address: Option<Address>,

	/// Directory holding the keystore files used to sign transactions.
	#[structopt(short("k"), long, parse(from_os_str), takes_value = true)]
	pub keystore_path: Option<PathBuf>,

	/// Account signing transactions. Prompted for when omitted.
	#[structopt(short("a"), long, parse(try_from_str = parse_address), takes_value = true)]
	pub address: Option<Address>,

	#[structopt(long, parse(from_os_str), takes_value = true)]
	pub password_file: Option<PathBuf>,

	/// Seconds between two polls of a watched log filter.
	#[structopt(long, default_value = "2")]
	pub poll_interval: u64,

	/// Log filter directives, `RUST_LOG` style.
	#[structopt(long, default_value = "info")]
	pub log_filter: String,

	#[structopt(subcommand)]
	cmd: Command,
}

#[derive(StructOpt, Debug)]
pub enum Command {
	/// Shows owner, expiry and availability of a name.
	NameInfo { name: String },
	/// Shows the holder of a privilege slot.
	PrivilegeInfo {
		#[structopt(parse(try_from_str = parse_u256))]
		token_id: U256,
		#[structopt(parse(try_from_str = parse_u256))]
		privilege_id: U256,
		/// Also checks whether this account holds the privilege.
		#[structopt(long, parse(try_from_str = parse_address))]
		user: Option<Address>,
	},
	/// Registers a name. The signing account must be a registrar.
	Register {
		name: String,
		#[structopt(parse(try_from_str = parse_address))]
		owner: Address,
		/// Registration duration in seconds.
		#[structopt(parse(try_from_str = parse_u256))]
		duration: U256,
	},
	/// Assigns a privilege slot of a token until `expires`.
	SetPrivilege {
		#[structopt(parse(try_from_str = parse_u256))]
		token_id: U256,
		#[structopt(parse(try_from_str = parse_u256))]
		privilege_id: U256,
		#[structopt(parse(try_from_str = parse_address))]
		user: Address,
		/// Unix timestamp the privilege expires at.
		#[structopt(parse(try_from_str = parse_u256))]
		expires: U256,
	},
	/// Lists past registrations and privilege assignments.
	Events {
		#[structopt(long)]
		from_block: Option<u64>,
		#[structopt(long)]
		to_block: Option<u64>,
	},
	/// Prints token transfers of the configured contracts as they happen.
	Watch {
		#[structopt(long)]
		from_block: Option<u64>,
	},
}

pub struct Context {
	pub web3: Arc<Web3<Http>>,
	pub registry_address: Option<Address>,
	pub privilege_address: Option<Address>,
	pub keystore_path: Option<PathBuf>,
	pub address: Option<Address>,
	pub password_file: Option<PathBuf>,
	pub poll_interval: Duration,
}

#[tokio::main]
async fn main() {
	let cli = Opt::from_args();

	tracing_subscriber::fmt().with_env_filter(EnvFilter::new(&cli.log_filter)).init();

	let transport = match Http::new(&cli.eth_rpc_endpoint) {
		Ok(transport) => transport,
		Err(e) => {
			eprintln!("Could not connect to ETH's RPC endpoint: {}", e);
			process::exit(1);
		},
	};

	let context = Context {
		web3: Arc::new(Web3::new(transport)),
		registry_address: cli.registry_address,
		privilege_address: cli.privilege_address,
		keystore_path: cli.keystore_path,
		address: cli.address,
		password_file: cli.password_file,
		poll_interval: Duration::from_secs(cli.poll_interval),
	};

	let result = match cli.cmd {
		Command::NameInfo { name } => commands::name_info(&context, &name).await,
		Command::PrivilegeInfo { token_id, privilege_id, user } =>
			commands::privilege_info(&context, token_id, privilege_id, user).await,
		Command::Register { name, owner, duration } =>
			commands::register(&context, name, owner, duration).await,
		Command::SetPrivilege { token_id, privilege_id, user, expires } =>
			commands::set_privilege(&context, token_id, privilege_id, user, expires).await,
		Command::Events { from_block, to_block } =>
			commands::events(
				&context,
				from_block.map(BlockNumber::from),
				to_block.map(BlockNumber::from),
			)
			.await,
		Command::Watch { from_block } =>
			commands::watch(&context, from_block.map(BlockNumber::from)).await,
	};

	if let Err(e) = result {
		eprintln!("{}", e);
		process::exit(1);
	}
}
