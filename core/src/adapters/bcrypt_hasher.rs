//! Bcrypt adapter for PasswordHasher
//!
//! Bcrypt is CPU-bound, so both operations run on tokio's blocking pool.

use async_trait::async_trait;

use crate::domain::ports::hashing::{MAX_HASH_COST, MIN_HASH_COST};
use crate::domain::ports::PasswordHasher;
use crate::error::HashError;

/// Bcrypt implementation of PasswordHasher
#[derive(Debug, Clone, Copy, Default)]
pub struct BcryptHasher;

impl BcryptHasher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash(&self, plaintext: &str, cost: u32) -> Result<String, HashError> {
        if !(MIN_HASH_COST..=MAX_HASH_COST).contains(&cost) {
            return Err(HashError::InvalidCost(cost));
        }

        let plaintext = plaintext.to_owned();
        let hash = tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost))
            .await
            .map_err(|e| HashError::Task(e.to_string()))??;

        Ok(hash)
    }

    async fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, HashError> {
        let plaintext = plaintext.to_owned();
        let hash = hash.to_owned();
        let matches = tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &hash))
            .await
            .map_err(|e| HashError::Task(e.to_string()))??;

        Ok(matches)
    }
}
