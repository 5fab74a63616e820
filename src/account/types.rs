//! Account record definitions

use crate::error::RosterError;
use crate::identity::Identity;
use serde::{Deserialize, Serialize};

/// Maximum display name length in bytes (fixed-capacity encoding bound)
pub const MAX_NAME_BYTES: usize = 32;

/// The per-identity account record.
///
/// `owner` is set at creation and never changes. New fields must be
/// appended with `#[serde(default)]` so records written by older
/// versions still decode.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AccountRecord {
    pub owner: Identity,
    pub name: String,
    #[serde(default)]
    pub created_at: u64,
}

/// Validate a display name against the length bound
pub fn validate_name(name: &str) -> Result<(), RosterError> {
    if name.len() > MAX_NAME_BYTES {
        return Err(RosterError::InvalidInput(format!(
            "Name exceeds {} bytes (got {})",
            MAX_NAME_BYTES,
            name.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_bound() {
        assert!(validate_name("").is_ok());
        assert!(validate_name(&"a".repeat(32)).is_ok());
        assert!(validate_name(&"a".repeat(33)).is_err());
        // multi-byte characters count in bytes, not chars
        assert!(validate_name(&"é".repeat(17)).is_err());
    }
}
