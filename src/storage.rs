use crate::account::types::AccountRecord;
use crate::error::RosterError;
use crate::identity::Identity;
use crate::registry::controller::ControllerRecord;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;

const ACCOUNT_PREFIX: &str = "account:";
const CONTROLLER_KEY: &str = "controller";

/// Embedded key-value mirror for registry state.
///
/// Records are bincode-encoded under string keys: one `account:<hex>`
/// entry per account, one `controller` entry for the controller record.
#[derive(Clone)]
pub struct Storage {
    db: sled::Db,
}

impl Storage {
    pub fn new(path: &str) -> Result<Self, RosterError> {
        let db = sled::open(path).map_err(|e| RosterError::Storage(e.to_string()))?;
        Ok(Storage { db })
    }

    /// In-memory database, discarded on drop. For tests.
    pub fn temporary() -> Result<Self, RosterError> {
        let db = sled::Config::new()
            .temporary(true)
            .open()
            .map_err(|e| RosterError::Storage(e.to_string()))?;
        Ok(Storage { db })
    }

    // Generic Helper: Put
    fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<(), RosterError> {
        let serialized = bincode::serialize(value).map_err(|e| RosterError::Storage(e.to_string()))?;
        self.db
            .insert(key.as_bytes(), serialized)
            .map(|_| ())
            .map_err(|e| RosterError::Storage(e.to_string()))
    }

    // Generic Helper: Get
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, RosterError> {
        match self.db.get(key.as_bytes()) {
            Ok(Some(data)) => {
                let deserialized =
                    bincode::deserialize(&data).map_err(|e| RosterError::Storage(e.to_string()))?;
                Ok(Some(deserialized))
            }
            Ok(None) => Ok(None),
            Err(e) => Err(RosterError::Storage(e.to_string())),
        }
    }

    fn delete(&self, key: &str) -> Result<(), RosterError> {
        self.db
            .remove(key.as_bytes())
            .map(|_| ())
            .map_err(|e| RosterError::Storage(e.to_string()))
    }

    // --- Specific Accessors ---

    pub fn save_account(&self, record: &AccountRecord) -> Result<(), RosterError> {
        self.put(&format!("{}{}", ACCOUNT_PREFIX, record.owner), record)
    }

    pub fn delete_account(&self, owner: &Identity) -> Result<(), RosterError> {
        self.delete(&format!("{}{}", ACCOUNT_PREFIX, owner))
    }

    pub fn load_accounts(&self) -> Result<HashMap<Identity, AccountRecord>, RosterError> {
        let mut accounts = HashMap::new();
        for entry in self.db.scan_prefix(ACCOUNT_PREFIX.as_bytes()) {
            let (_, value) = entry.map_err(|e| RosterError::Storage(e.to_string()))?;
            let record: AccountRecord =
                bincode::deserialize(&value).map_err(|e| RosterError::Storage(e.to_string()))?;
            accounts.insert(record.owner, record);
        }
        Ok(accounts)
    }

    pub fn save_controller(&self, record: &ControllerRecord) -> Result<(), RosterError> {
        self.put(CONTROLLER_KEY, record)
    }

    pub fn load_controller(&self) -> Result<Option<ControllerRecord>, RosterError> {
        self.get(CONTROLLER_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(n: u8) -> Identity {
        Identity::from_bytes([n; 32])
    }

    fn record(n: u8, name: &str) -> AccountRecord {
        AccountRecord {
            owner: ident(n),
            name: name.to_string(),
            created_at: 1_700_000_000_000,
        }
    }

    #[test]
    fn test_account_round_trip() {
        let storage = Storage::temporary().unwrap();
        storage.save_account(&record(1, "alice")).unwrap();
        storage.save_account(&record(2, "bob")).unwrap();

        let accounts = storage.load_accounts().unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[&ident(1)].name, "alice");
        assert_eq!(accounts[&ident(2)].name, "bob");
    }

    #[test]
    fn test_delete_account() {
        let storage = Storage::temporary().unwrap();
        storage.save_account(&record(1, "alice")).unwrap();
        storage.delete_account(&ident(1)).unwrap();
        assert!(storage.load_accounts().unwrap().is_empty());
    }

    #[test]
    fn test_controller_round_trip() {
        let storage = Storage::temporary().unwrap();
        assert!(storage.load_controller().unwrap().is_none());

        let rec = ControllerRecord {
            admin: ident(9),
            version: "v1".to_string(),
        };
        storage.save_controller(&rec).unwrap();
        assert_eq!(storage.load_controller().unwrap().unwrap(), rec);
    }

    #[test]
    fn test_controller_key_not_confused_with_accounts() {
        let storage = Storage::temporary().unwrap();
        let rec = ControllerRecord {
            admin: ident(9),
            version: "v1".to_string(),
        };
        storage.save_controller(&rec).unwrap();
        assert!(storage.load_accounts().unwrap().is_empty());
    }
}
