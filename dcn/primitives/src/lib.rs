#![warn(clippy::missing_docs_in_private_items)]

/// Well-known roles, interface ids and defaults.
pub mod constants;
/// Keccak based hashing helpers.
pub mod hashing;
/// Base types.
pub mod types;
