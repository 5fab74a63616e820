//! The behavior seam between the registry surface and the account store.
//!
//! Logic versions are swapped by replacing the `Arc<dyn RegistryLogic>`
//! held by the controller. A version must never reorder or resize the
//! fields of persisted records; it may only append new ones.

use crate::account::AccountStore;
use crate::error::RosterError;
use crate::identity::Identity;
use std::sync::Arc;

/// A versioned implementation of the registry's account operations.
///
/// Implementations operate on the store handed to them per call and hold
/// no account state of their own, so replacing one leaves the persisted
/// mapping untouched.
pub trait RegistryLogic: Send + Sync {
    /// Stable label identifying this implementation
    fn version(&self) -> &str;

    fn create_account(
        &self,
        store: &mut AccountStore,
        caller: Identity,
        name: &str,
    ) -> Result<(), RosterError>;

    fn get_name(&self, store: &AccountStore, caller: Identity) -> Result<String, RosterError>;

    fn update_name(
        &self,
        store: &mut AccountStore,
        caller: Identity,
        new_name: &str,
    ) -> Result<(), RosterError>;

    fn delete_account(&self, store: &mut AccountStore, caller: Identity)
        -> Result<(), RosterError>;

    fn has_account(&self, store: &AccountStore, caller: Identity) -> bool;
}

/// Shared handle to an installed logic version
pub type LogicRef = Arc<dyn RegistryLogic>;
