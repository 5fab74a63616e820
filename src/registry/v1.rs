//! First shipped logic version.

use super::logic::RegistryLogic;
use crate::account::AccountStore;
use crate::error::RosterError;
use crate::identity::Identity;

pub const VERSION_V1: &str = "v1";

/// Version 1 passes each operation through to the store, which enforces
/// the uniqueness, existence, and name-length invariants.
pub struct LogicV1;

impl RegistryLogic for LogicV1 {
    fn version(&self) -> &str {
        VERSION_V1
    }

    fn create_account(
        &self,
        store: &mut AccountStore,
        caller: Identity,
        name: &str,
    ) -> Result<(), RosterError> {
        store.create_account(caller, name)
    }

    fn get_name(&self, store: &AccountStore, caller: Identity) -> Result<String, RosterError> {
        store.get_name(caller)
    }

    fn update_name(
        &self,
        store: &mut AccountStore,
        caller: Identity,
        new_name: &str,
    ) -> Result<(), RosterError> {
        store.update_name(caller, new_name)
    }

    fn delete_account(
        &self,
        store: &mut AccountStore,
        caller: Identity,
    ) -> Result<(), RosterError> {
        store.delete_account(caller)
    }

    fn has_account(&self, store: &AccountStore, caller: Identity) -> bool {
        store.contains(caller)
    }
}
