//! Password hashing port
//!
//! One-way, salted hashing of organization passwords. Hashing the same
//! plaintext twice yields different strings; `verify` only confirms a match.

use async_trait::async_trait;

use crate::error::HashError;

/// Lowest work factor accepted by `PasswordHasher::hash`
pub const MIN_HASH_COST: u32 = 4;

/// Highest work factor accepted by `PasswordHasher::hash`
pub const MAX_HASH_COST: u32 = 31;

/// Hashes and verifies passwords
///
/// Implementations must not block the calling task for the duration of the
/// hash; CPU-bound work belongs on a blocking thread.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password with the given work factor
    async fn hash(&self, plaintext: &str, cost: u32) -> Result<String, HashError>;

    /// Check a plaintext password against a stored hash
    ///
    /// Returns `Ok(false)` on mismatch. A malformed hash is an error.
    async fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, HashError>;
}
