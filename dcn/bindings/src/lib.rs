//! Typed bindings for the `DcnRegistry` and `MultiPrivilege` contracts.
//!
//! Each contract handle is bound to an address and a transport. Read accessors are available
//! when the transport implements [`transport::Caller`], write dispatchers when it implements
//! [`transport::Transactor`] and event filtering/watching when it implements
//! [`transport::Filterer`]. `web3::Web3` implements all three.

pub mod contracts;
pub mod errors;
pub mod events;
pub mod filters;
pub mod iterator;
pub mod keys;
pub mod proxies;
pub mod subscription;
#[cfg(test)]
mod tests;
pub mod transport;
mod watch;
