//! Domain ports (traits)
//!
//! Port traits define interfaces that the use cases require.
//! Adapters provide concrete implementations of these traits.

pub mod hashing;
pub mod repositories;

pub use hashing::PasswordHasher;
pub use repositories::{OrganizationRepository, PetRepository};
