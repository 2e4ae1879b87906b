//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//!
//! Lookups return `Ok(None)` when nothing matches; an `Err` always means the
//! storage itself failed.

use async_trait::async_trait;

use crate::domain::entities::{NewOrganization, NewPet, Organization, OrganizationId, Pet};
use crate::error::DomainError;

/// Repository for Organization entities
#[async_trait]
pub trait OrganizationRepository: Send + Sync {
    /// Find an organization by its (unique) email
    async fn find_by_email(&self, email: &str) -> Result<Option<Organization>, DomainError>;

    /// Find an organization by ID
    async fn find_by_id(&self, id: &OrganizationId) -> Result<Option<Organization>, DomainError>;

    /// Create a new organization
    async fn create(&self, organization: &NewOrganization) -> Result<Organization, DomainError>;
}

/// Repository for Pet entities
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Create a new pet, assigning its id
    async fn create(&self, pet: &NewPet) -> Result<Pet, DomainError>;
}
