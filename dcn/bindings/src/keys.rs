use std::{
	fmt,
	fs::File,
	path::{
		Path,
		PathBuf,
	},
};

use dcn_primitives::types::{
	Address,
	H256,
};
use ethsign::{
	KeyFile,
	SecretKey,
};
use thiserror::Error;
use tiny_keccak::{
	Hasher,
	Keccak,
};
use web3::signing::{
	Key,
	Signature,
	SigningError,
};

/// Errors raised while unlocking a keystore file.
#[derive(Error, Debug)]
pub enum KeystoreError {
	#[error("Could not open keystore file `{0}`")]
	Open(PathBuf),
	#[error("Could not read keystore file `{0}`")]
	Read(PathBuf),
	#[error("Could not decrypt keystore file `{0}`")]
	Decrypt(PathBuf),
	#[error("Keystore file `{0}` does not hold a valid secret key")]
	InvalidKey(PathBuf),
}

/// Secret key used to sign transactions locally.
#[derive(Clone)]
pub struct PrivateKey {
	inner: SecretKey,
}

impl PrivateKey {
	/// Decrypts a JSON keystore file with the given password.
	pub fn from_keystore(path: &Path, password: &str) -> Result<Self, KeystoreError> {
		let file = File::open(path).map_err(|_| KeystoreError::Open(path.to_owned()))?;

		let key: KeyFile =
			serde_json::from_reader(file).map_err(|_| KeystoreError::Read(path.to_owned()))?;

		let plain = key
			.crypto
			.decrypt(&password.into())
			.map_err(|_| KeystoreError::Decrypt(path.to_owned()))?;

		let inner =
			SecretKey::from_raw(&plain).map_err(|_| KeystoreError::InvalidKey(path.to_owned()))?;

		Ok(Self { inner })
	}
}

impl fmt::Debug for PrivateKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PrivateKey").field("address", &Key::address(self)).finish()
	}
}

impl Key for PrivateKey {
	fn sign(&self, message: &[u8], chain_id: Option<u64>) -> Result<Signature, SigningError> {
		let signature = self.inner.sign(message).map_err(|_| SigningError::InvalidMessage)?;

		let v = match chain_id {
			Some(chain_id) => signature.v as u64 + 35 + chain_id * 2,
			None => signature.v as u64 + 27,
		};
		Ok(Signature { r: H256::from(signature.r), s: H256::from(signature.s), v })
	}

	fn sign_message(&self, message: &[u8]) -> Result<Signature, SigningError> {
		let mut prefixed = format!("\x19Ethereum Signed Message:\n{}", message.len()).into_bytes();
		prefixed.extend_from_slice(message);

		let mut keccak = Keccak::v256();
		let mut hash = [0u8; 32];
		keccak.update(&prefixed);
		keccak.finalize(&mut hash);

		let signature = self.inner.sign(&hash).map_err(|_| SigningError::InvalidMessage)?;

		Ok(Signature {
			r: H256::from(signature.r),
			s: H256::from(signature.s),
			v: signature.v as u64 + 27,
		})
	}

	fn address(&self) -> Address {
		Address::from(self.inner.public().address())
	}
}
