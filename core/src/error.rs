//! Unified error types for the FindAFriend core
//!
//! This module defines error types for each layer:
//! - `DomainError`: Repository/persistence errors
//! - `HashError`: Password hashing errors
//! - `AppError`: Use case errors (the two domain kinds plus opaque wrapped failures)

use thiserror::Error;

/// Domain layer errors - raised by repositories
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity already exists: {0}")]
    AlreadyExists(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Password hashing errors
#[derive(Debug, Error)]
pub enum HashError {
    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("Unsupported hash cost: {0}")]
    InvalidCost(u32),

    #[error("Hashing task failed: {0}")]
    Task(String),
}

/// Application layer errors - returned by use cases
///
/// `InvalidCredentials` and `ResourceNotFound` are the kinds adapters are expected
/// to translate. Everything else is an unclassified failure.
#[derive(Debug, Error)]
pub enum AppError {
    /// Unknown email or wrong password. The two cases are deliberately the same.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Resource not found")]
    ResourceNotFound,

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Hashing error: {0}")]
    Hashing(#[from] HashError),
}

impl AppError {
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, AppError::InvalidCredentials)
    }

    pub fn is_resource_not_found(&self) -> bool {
        matches!(self, AppError::ResourceNotFound)
    }
}
