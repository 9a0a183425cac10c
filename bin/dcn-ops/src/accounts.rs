use std::{
	collections::BTreeMap,
	fs::{
		self,
		File,
	},
	io::{
		self,
		stdin,
		stdout,
		BufRead,
		Write,
	},
	path::{
		Path,
		PathBuf,
	},
};

use dcn_bindings::keys::PrivateKey;
use dcn_primitives::types::Address;
use ethsign::KeyFile;

/// Keystore files of `keystore` indexed by the address they unlock.
pub fn list_keys(keystore: &Path) -> io::Result<BTreeMap<Address, PathBuf>> {
	let mut keys = BTreeMap::new();
	for entry in fs::read_dir(keystore)? {
		let path = entry?.path();
		let key: KeyFile = match File::open(&path).map(serde_json::from_reader) {
			Ok(Ok(key)) => key,
			_ => continue,
		};
		if let Some(address) = key.address {
			keys.insert(Address::from_slice(&address.0), path);
		}
	}
	Ok(keys)
}

fn prompt_key(keys: &BTreeMap<Address, PathBuf>) -> io::Result<PathBuf> {
	select_key(keys, stdin().lock(), stdout())
}

fn select_key<R: BufRead, W: Write>(
	keys: &BTreeMap<Address, PathBuf>,
	mut input: R,
	mut output: W,
) -> io::Result<PathBuf> {
	writeln!(output, "Select key:")?;
	loop {
		for (index, address) in keys.keys().enumerate() {
			writeln!(output, "[{}]: {:#x}", index, address)?;
		}
		write!(output, "Selected key: ")?;
		output.flush()?;

		let mut line = String::new();
		if input.read_line(&mut line)? == 0 {
			return Err(io::Error::new(
				io::ErrorKind::UnexpectedEof,
				"input closed before a key was selected",
			))
		}
		let selected = line.trim().parse::<usize>().ok().and_then(|index| keys.values().nth(index));
		if let Some(path) = selected {
			return Ok(path.clone())
		}
	}
}

/// Unlocks the signing key of `address`, or of an interactively selected account.
pub fn load_signer(
	keystore_path: &Path,
	address: Option<Address>,
	password_file: Option<&Path>,
) -> Result<PrivateKey, String> {
	let keys = list_keys(keystore_path).map_err(|e| format!("Could not list accounts: {}", e))?;
	if keys.is_empty() {
		return Err(format!("No keystore files found in {}", keystore_path.display()))
	}

	let key_path = match address {
		Some(address) => keys
			.get(&address)
			.cloned()
			.ok_or_else(|| format!("No keystore file for {:#x}", address))?,
		None => prompt_key(&keys).map_err(|e| format!("Could not select key: {}", e))?,
	};

	let password = match password_file {
		Some(password_file) => fs::read_to_string(password_file)
			.map_err(|e| format!("Error reading password file: {}", e))?
			.trim()
			.to_owned(),
		None => rpassword::read_password_from_tty(Some("Password: "))
			.map_err(|e| format!("Could not read password: {}", e))?,
	};

	PrivateKey::from_keystore(&key_path, &password).map_err(|e| e.to_string())
}
