//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod bcrypt_hasher;
pub mod postgres;

pub use bcrypt_hasher::BcryptHasher;
pub use postgres::{PostgresOrganizationRepository, PostgresPetRepository};
