//! Governs which logic version is live.
//!
//! The controller holds the admin identity and the active implementation
//! reference. It never reads or writes account data.

use super::logic::LogicRef;
use crate::error::RosterError;
use crate::identity::Identity;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Persisted controller state: who may upgrade, and which version is
/// live. New fields must be appended with `#[serde(default)]`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ControllerRecord {
    pub admin: Identity,
    pub version: String,
}

pub struct Controller {
    admin: Identity,
    active: LogicRef,
}

impl Controller {
    pub fn new(admin: Identity, logic: LogicRef) -> Self {
        Controller {
            admin,
            active: logic,
        }
    }

    pub fn admin(&self) -> Identity {
        self.admin
    }

    pub fn active(&self) -> LogicRef {
        self.active.clone()
    }

    /// Swap the active implementation. Admin only; the account mapping is
    /// untouched by the swap.
    pub fn upgrade(&mut self, caller: Identity, new_logic: LogicRef) -> Result<(), RosterError> {
        if caller != self.admin {
            warn!(
                "Rejected upgrade attempt by non-admin {} (active logic '{}')",
                caller,
                self.active.version()
            );
            return Err(RosterError::Unauthorized);
        }
        info!(
            "Upgrading registry logic '{}' -> '{}'",
            self.active.version(),
            new_logic.version()
        );
        self.active = new_logic;
        Ok(())
    }

    pub fn record(&self) -> ControllerRecord {
        ControllerRecord {
            admin: self.admin,
            version: self.active.version().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::v1::LogicV1;
    use std::sync::Arc;

    fn ident(n: u8) -> Identity {
        Identity::from_bytes([n; 32])
    }

    struct LogicV2;

    impl crate::registry::logic::RegistryLogic for LogicV2 {
        fn version(&self) -> &str {
            "v2"
        }
        fn create_account(
            &self,
            store: &mut crate::account::AccountStore,
            caller: Identity,
            name: &str,
        ) -> Result<(), RosterError> {
            store.create_account(caller, name)
        }
        fn get_name(
            &self,
            store: &crate::account::AccountStore,
            caller: Identity,
        ) -> Result<String, RosterError> {
            store.get_name(caller)
        }
        fn update_name(
            &self,
            store: &mut crate::account::AccountStore,
            caller: Identity,
            new_name: &str,
        ) -> Result<(), RosterError> {
            store.update_name(caller, new_name)
        }
        fn delete_account(
            &self,
            store: &mut crate::account::AccountStore,
            caller: Identity,
        ) -> Result<(), RosterError> {
            store.delete_account(caller)
        }
        fn has_account(&self, store: &crate::account::AccountStore, caller: Identity) -> bool {
            store.contains(caller)
        }
    }

    #[test]
    fn test_admin_may_upgrade() {
        let mut controller = Controller::new(ident(1), Arc::new(LogicV1));
        controller.upgrade(ident(1), Arc::new(LogicV2)).unwrap();
        assert_eq!(controller.record().version, "v2");
        assert_eq!(controller.admin(), ident(1));
    }

    #[test]
    fn test_non_admin_rejected_and_version_unchanged() {
        let mut controller = Controller::new(ident(1), Arc::new(LogicV1));
        let err = controller.upgrade(ident(2), Arc::new(LogicV2)).unwrap_err();
        assert!(matches!(err, RosterError::Unauthorized));
        assert_eq!(controller.record().version, "v1");
    }
}
