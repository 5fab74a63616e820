pub mod account;
pub mod cli;
pub mod config;
pub mod error;
pub mod identity;
pub mod registry;
pub mod storage;

pub use account::{AccountRecord, AccountStore, MAX_NAME_BYTES};
pub use error::RosterError;
pub use identity::Identity;
pub use registry::{LogicRef, LogicV1, Registry, RegistryLogic};
pub use storage::Storage;
