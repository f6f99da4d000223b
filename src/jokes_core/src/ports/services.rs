use async_trait::async_trait;
use thiserror::Error;

use crate::domain::user::{Password, PasswordHash};

#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("Failed to hash password: {0}")]
    HashingFailed(String),
    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
}

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: Password) -> Result<PasswordHash, PasswordHasherError>;

    /// `Ok(false)` on mismatch; `Err` only when the stored hash cannot be read.
    async fn verify(
        &self,
        password: Password,
        expected: PasswordHash,
    ) -> Result<bool, PasswordHasherError>;
}
