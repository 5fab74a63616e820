//! Account subsystem
//!
//! One record per identity: the identity that creates an account is its
//! owner, and only the owner can read, rename, or delete it.

pub mod store;
pub mod types;

pub use store::AccountStore;
pub use types::{AccountRecord, MAX_NAME_BYTES};
