//! Account storage and management

use super::types::{validate_name, AccountRecord};
use crate::error::RosterError;
use crate::identity::Identity;
use crate::storage::Storage;
use std::collections::HashMap;
use std::sync::Arc;

/// The identity->account mapping.
///
/// Enforces at most one account per identity. Every operation is scoped
/// to the caller's own record; no operation reads or writes another
/// identity's account. When a storage backend is attached, mutations are
/// mirrored to it as they happen.
pub struct AccountStore {
    accounts: HashMap<Identity, AccountRecord>,
    storage: Option<Arc<Storage>>,
}

impl AccountStore {
    /// Create a new empty account store
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
            storage: None,
        }
    }

    /// Create with a storage backend, loading any persisted records
    pub fn with_storage(storage: Arc<Storage>) -> Result<Self, RosterError> {
        let accounts = storage.load_accounts()?;
        Ok(Self {
            accounts,
            storage: Some(storage),
        })
    }

    /// Create an account for `caller`
    pub fn create_account(&mut self, caller: Identity, name: &str) -> Result<(), RosterError> {
        if self.accounts.contains_key(&caller) {
            return Err(RosterError::AlreadyExists);
        }
        validate_name(name)?;

        let record = AccountRecord {
            owner: caller,
            name: name.to_string(),
            created_at: current_timestamp(),
        };
        self.accounts.insert(caller, record.clone());
        self.persist(&record)
    }

    /// Get the stored name for `caller`
    pub fn get_name(&self, caller: Identity) -> Result<String, RosterError> {
        self.accounts
            .get(&caller)
            .map(|record| record.name.clone())
            .ok_or(RosterError::NotFound)
    }

    /// Replace the stored name for `caller`
    pub fn update_name(&mut self, caller: Identity, new_name: &str) -> Result<(), RosterError> {
        validate_name(new_name)?;
        let record = self.accounts.get_mut(&caller).ok_or(RosterError::NotFound)?;
        record.name = new_name.to_string();

        let record = record.clone();
        self.persist(&record)
    }

    /// Remove the caller's account entirely
    pub fn delete_account(&mut self, caller: Identity) -> Result<(), RosterError> {
        self.accounts.remove(&caller).ok_or(RosterError::NotFound)?;
        if let Some(storage) = &self.storage {
            storage.delete_account(&caller)?;
        }
        Ok(())
    }

    /// Whether an account exists for `caller`. Never fails on absence.
    pub fn contains(&self, caller: Identity) -> bool {
        self.accounts.contains_key(&caller)
    }

    /// Get the caller's record
    pub fn get(&self, caller: Identity) -> Option<&AccountRecord> {
        self.accounts.get(&caller)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn persist(&self, record: &AccountRecord) -> Result<(), RosterError> {
        if let Some(storage) = &self.storage {
            storage.save_account(record)?;
        }
        Ok(())
    }
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::new()
    }
}

fn current_timestamp() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_millis() as u64
}
