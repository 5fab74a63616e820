use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("An account already exists for this identity")]
    AlreadyExists,
    #[error("No account exists for this identity")]
    NotFound,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Caller is not the registry admin")]
    Unauthorized,
    #[error("Registry is already initialized")]
    AlreadyInitialized,
    #[error("Registry is not initialized")]
    NotInitialized,
    #[error("Storage error: {0}")]
    Storage(String),
}
