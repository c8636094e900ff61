use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{hashed_password::HashedPassword, password::Password};

#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("Invalid password digest")]
    InvalidDigest,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Salted, deliberately slow password hashing.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hashes `password` with a fresh random salt.
    async fn hash(&self, password: &Password) -> Result<HashedPassword, PasswordHasherError>;

    /// Returns `Ok(false)` on mismatch. Only a digest that cannot be parsed is an error.
    async fn verify(
        &self,
        digest: &HashedPassword,
        password: &Password,
    ) -> Result<bool, PasswordHasherError>;
}
