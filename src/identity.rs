use crate::error::RosterError;
use ed25519_dalek::{SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// The principal on whose behalf an operation is invoked.
///
/// An identity is a 32-byte Ed25519 public key. The registry takes the
/// caller's identity as an explicit parameter and trusts the invocation
/// context; no signature verification happens at this layer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity([u8; 32]);

impl Identity {
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Identity(bytes)
    }

    pub fn from_hex(s: &str) -> Result<Self, RosterError> {
        let bytes = hex::decode(s)
            .map_err(|e| RosterError::InvalidInput(format!("Invalid identity hex: {}", e)))?;
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|_| RosterError::InvalidInput("Identity must be 32 bytes".to_string()))?;
        Ok(Identity(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<VerifyingKey> for Identity {
    fn from(key: VerifyingKey) -> Self {
        Identity(key.to_bytes())
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity({})", self)
    }
}

/// An identity keypair persisted as JSON, hex-encoded.
///
/// Keyfiles are local operator credentials for the CLI. The secret key is
/// stored in the clear; keyfiles belong in the operator's own directory.
#[derive(Serialize, Deserialize)]
pub struct IdentityFile {
    pub public_key: String,
    pub secret_key: String,
}

impl IdentityFile {
    /// Generate a fresh Ed25519 keypair
    pub fn generate() -> Self {
        let mut csprng = OsRng;
        let signing_key = SigningKey::generate(&mut csprng);
        IdentityFile {
            public_key: hex::encode(signing_key.verifying_key().to_bytes()),
            secret_key: hex::encode(signing_key.to_bytes()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), RosterError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| RosterError::Storage(e.to_string()))?;
        fs::write(path, json).map_err(|e| RosterError::Storage(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, RosterError> {
        let content = fs::read_to_string(path)
            .map_err(|e| RosterError::Storage(format!("Failed to read '{}': {}", path.display(), e)))?;
        serde_json::from_str(&content).map_err(|e| RosterError::Storage(e.to_string()))
    }

    /// The identity this keyfile acts as
    pub fn identity(&self) -> Result<Identity, RosterError> {
        Identity::from_hex(&self.public_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let id = Identity::from_bytes([7u8; 32]);
        let hex = id.to_string();
        assert_eq!(hex.len(), 64);
        assert_eq!(Identity::from_hex(&hex).unwrap(), id);
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(Identity::from_hex("zzzz").is_err());
        assert!(Identity::from_hex("abcd").is_err()); // too short
    }

    #[test]
    fn test_generated_identities_are_distinct() {
        let a = IdentityFile::generate();
        let b = IdentityFile::generate();
        assert_ne!(a.public_key, b.public_key);
        assert_eq!(a.identity().unwrap(), a.identity().unwrap());
    }
}
