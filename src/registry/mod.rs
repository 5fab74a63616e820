//! Registry surface
//!
//! Every external call resolves the currently-active logic through the
//! controller and executes it against the account store. Calls hold the
//! controller read lock for their full duration, so `initialize` and
//! `upgrade` (which take the write lock) are serialized against all
//! other operations; the store write lock serializes mutations, so a
//! same-identity race has exactly one winner and the loser observes the
//! winner's post-state.

pub mod controller;
pub mod logic;
pub mod v1;

pub use controller::{Controller, ControllerRecord};
pub use logic::{LogicRef, RegistryLogic};
pub use v1::LogicV1;

use crate::account::AccountStore;
use crate::error::RosterError;
use crate::identity::Identity;
use crate::storage::Storage;
use std::sync::{Arc, RwLock};
use tracing::{debug, info};

pub struct Registry {
    store: RwLock<AccountStore>,
    controller: RwLock<Option<Controller>>,
    storage: Option<Arc<Storage>>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry").finish_non_exhaustive()
    }
}

impl Registry {
    /// New in-memory registry, not yet initialized
    pub fn new() -> Self {
        Registry {
            store: RwLock::new(AccountStore::new()),
            controller: RwLock::new(None),
            storage: None,
        }
    }

    /// Reopen a registry from storage.
    ///
    /// Loads all persisted accounts. If a controller record exists, its
    /// stored version label is re-bound against `implementations`; an
    /// unknown label is an error, never a silent reset. Without a
    /// controller record the registry starts uninitialized.
    pub fn with_storage(
        storage: Arc<Storage>,
        implementations: &[LogicRef],
    ) -> Result<Self, RosterError> {
        let store = AccountStore::with_storage(storage.clone())?;
        if !store.is_empty() {
            info!("Loaded {} account(s) from storage", store.len());
        }

        let controller = match storage.load_controller()? {
            Some(record) => {
                let logic = implementations
                    .iter()
                    .find(|l| l.version() == record.version)
                    .cloned()
                    .ok_or_else(|| {
                        RosterError::Storage(format!(
                            "No implementation available for persisted logic version '{}'",
                            record.version
                        ))
                    })?;
                info!(
                    "Restored controller: admin {}, logic '{}'",
                    record.admin, record.version
                );
                Some(Controller::new(record.admin, logic))
            }
            None => None,
        };

        Ok(Registry {
            store: RwLock::new(store),
            controller: RwLock::new(controller),
            storage: Some(storage),
        })
    }

    /// Establish the admin and the first logic version. One-time.
    pub fn initialize(&self, admin: Identity, logic: LogicRef) -> Result<(), RosterError> {
        let mut guard = self.controller.write().unwrap();
        if guard.is_some() {
            return Err(RosterError::AlreadyInitialized);
        }
        let controller = Controller::new(admin, logic);
        if let Some(storage) = &self.storage {
            storage.save_controller(&controller.record())?;
        }
        info!(
            "Registry initialized: admin {}, logic '{}'",
            admin,
            controller.record().version
        );
        *guard = Some(controller);
        Ok(())
    }

    /// Swap the active logic version. Admin only.
    pub fn upgrade(&self, caller: Identity, new_logic: LogicRef) -> Result<(), RosterError> {
        let mut guard = self.controller.write().unwrap();
        let controller = guard.as_mut().ok_or(RosterError::NotInitialized)?;
        controller.upgrade(caller, new_logic)?;
        if let Some(storage) = &self.storage {
            storage.save_controller(&controller.record())?;
        }
        Ok(())
    }

    pub fn create_account(&self, caller: Identity, name: &str) -> Result<(), RosterError> {
        let guard = self.controller.read().unwrap();
        let logic = guard.as_ref().ok_or(RosterError::NotInitialized)?.active();
        let mut store = self.store.write().unwrap();
        logic.create_account(&mut store, caller, name)?;
        debug!("Account created for {}", caller);
        Ok(())
    }

    pub fn get_name(&self, caller: Identity) -> Result<String, RosterError> {
        let guard = self.controller.read().unwrap();
        let logic = guard.as_ref().ok_or(RosterError::NotInitialized)?.active();
        let store = self.store.read().unwrap();
        logic.get_name(&store, caller)
    }

    pub fn update_name(&self, caller: Identity, new_name: &str) -> Result<(), RosterError> {
        let guard = self.controller.read().unwrap();
        let logic = guard.as_ref().ok_or(RosterError::NotInitialized)?.active();
        let mut store = self.store.write().unwrap();
        logic.update_name(&mut store, caller, new_name)?;
        debug!("Account renamed for {}", caller);
        Ok(())
    }

    pub fn delete_account(&self, caller: Identity) -> Result<(), RosterError> {
        let guard = self.controller.read().unwrap();
        let logic = guard.as_ref().ok_or(RosterError::NotInitialized)?.active();
        let mut store = self.store.write().unwrap();
        logic.delete_account(&mut store, caller)?;
        debug!("Account deleted for {}", caller);
        Ok(())
    }

    /// Existence probe; never fails on absence
    pub fn has_account(&self, caller: Identity) -> Result<bool, RosterError> {
        let guard = self.controller.read().unwrap();
        let logic = guard.as_ref().ok_or(RosterError::NotInitialized)?.active();
        let store = self.store.read().unwrap();
        Ok(logic.has_account(&store, caller))
    }

    pub fn admin(&self) -> Result<Identity, RosterError> {
        let guard = self.controller.read().unwrap();
        Ok(guard.as_ref().ok_or(RosterError::NotInitialized)?.admin())
    }

    pub fn active_version(&self) -> Result<String, RosterError> {
        let guard = self.controller.read().unwrap();
        Ok(guard
            .as_ref()
            .ok_or(RosterError::NotInitialized)?
            .record()
            .version)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
