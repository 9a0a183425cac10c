use web3::signing::keccak256;

use crate::types::{
	Selector,
	TokenId,
	Topic,
};

/// Token id of a registered name: `uint256(keccak256(label))`.
pub fn label_hash(label: &str) -> TokenId {
	TokenId::from_big_endian(&keccak256(label.as_bytes()))
}

/// First four bytes of the keccak hash of a canonical function signature.
pub fn selector(signature: &str) -> Selector {
	let hash = keccak256(signature.as_bytes());
	let mut selector = [0u8; 4];
	selector.copy_from_slice(&hash[..4]);
	selector
}

/// Topic hash of a canonical event signature.
pub fn topic(signature: &str) -> Topic {
	Topic::from_slice(&keccak256(signature.as_bytes()))
}

/// Parses a `0x` prefixed (or bare) hex string into a 4 byte interface id or selector.
pub fn selector_from_hex(value: &str) -> Result<Selector, String> {
	let bytes = hex::decode(value.trim_start_matches("0x"))
		.map_err(|e| format!("Invalid hex value `{}`: {}", value, e))?;
	if bytes.len() != 4 {
		return Err(format!("Expected 4 bytes, got {}", bytes.len()))
	}
	let mut selector = [0u8; 4];
	selector.copy_from_slice(&bytes);
	Ok(selector)
}
