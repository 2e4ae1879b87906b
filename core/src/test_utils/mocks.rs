//! In-memory implementations of port traits
//!
//! These store data in memory and can be switched into a failing mode to
//! simulate storage errors.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    NewOrganization, NewPet, Organization, OrganizationId, Pet, PetId,
};
use crate::domain::ports::{OrganizationRepository, PetRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Organization Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryOrganizationRepository {
    organizations: Arc<RwLock<HashMap<OrganizationId, Organization>>>,
    by_email: Arc<RwLock<HashMap<String, OrganizationId>>>,
    should_fail: bool,
}

impl InMemoryOrganizationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with a database error
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Pre-populate with an organization for testing
    pub fn with_organization(self, organization: Organization) -> Self {
        {
            let mut organizations = self.organizations.write().unwrap();
            let mut by_email = self.by_email.write().unwrap();

            by_email.insert(organization.email.clone(), organization.id.clone());
            organizations.insert(organization.id.clone(), organization);
        }
        self
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.should_fail {
            Err(DomainError::Database("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl OrganizationRepository for InMemoryOrganizationRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Organization>, DomainError> {
        self.check_available()?;

        let by_email = self.by_email.read().unwrap();
        let organizations = self.organizations.read().unwrap();

        if let Some(id) = by_email.get(email) {
            Ok(organizations.get(id).cloned())
        } else {
            Ok(None)
        }
    }

    async fn find_by_id(&self, id: &OrganizationId) -> Result<Option<Organization>, DomainError> {
        self.check_available()?;

        let organizations = self.organizations.read().unwrap();
        Ok(organizations.get(id).cloned())
    }

    async fn create(&self, new_org: &NewOrganization) -> Result<Organization, DomainError> {
        self.check_available()?;

        if new_org.password_hash.is_empty() {
            return Err(DomainError::Validation(
                "password_hash must not be empty".to_string(),
            ));
        }

        let mut organizations = self.organizations.write().unwrap();
        let mut by_email = self.by_email.write().unwrap();

        if by_email.contains_key(&new_org.email) {
            return Err(DomainError::AlreadyExists(format!(
                "Organization with email '{}' already exists",
                new_org.email
            )));
        }

        let organization = Organization {
            id: new_org.id.clone().unwrap_or_default(),
            name: new_org.name.clone(),
            responsable_name: new_org.responsable_name.clone(),
            email: new_org.email.clone(),
            password_hash: new_org.password_hash.clone(),
            address: new_org.address.clone(),
            city: new_org.city.clone(),
            postal_code: new_org.postal_code.clone(),
            created_at: Utc::now(),
        };

        by_email.insert(organization.email.clone(), organization.id.clone());
        organizations.insert(organization.id.clone(), organization.clone());

        Ok(organization)
    }
}

// ============================================================================
// In-Memory Pet Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryPetRepository {
    pets: Arc<RwLock<HashMap<PetId, Pet>>>,
    should_fail: bool,
}

impl InMemoryPetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with a database error
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Number of stored pets
    pub fn len(&self) -> usize {
        self.pets.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.read().unwrap().is_empty()
    }

    pub fn get(&self, id: &PetId) -> Option<Pet> {
        self.pets.read().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl PetRepository for InMemoryPetRepository {
    async fn create(&self, new_pet: &NewPet) -> Result<Pet, DomainError> {
        if self.should_fail {
            return Err(DomainError::Database("connection refused".to_string()));
        }

        let pet = Pet {
            id: PetId::new(),
            name: new_pet.name.clone(),
            description: new_pet.description.clone(),
            age: new_pet.age,
            energy_level: new_pet.energy_level,
            size: new_pet.size,
            organization_id: new_pet.organization_id.clone(),
            created_at: Utc::now(),
        };

        let mut pets = self.pets.write().unwrap();
        pets.insert(pet.id.clone(), pet.clone());

        Ok(pet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_new_organization, test_new_pet};

    #[tokio::test]
    async fn create_assigns_id_when_absent() {
        let repo = InMemoryOrganizationRepository::new();

        let organization = repo.create(&test_new_organization("hash")).await.unwrap();

        assert!(!organization.id.as_str().is_empty());
        let found = repo.find_by_id(&organization.id).await.unwrap();
        assert_eq!(found.unwrap().email, organization.email);
    }

    #[tokio::test]
    async fn create_keeps_explicit_id() {
        let repo = InMemoryOrganizationRepository::new();
        let mut new_org = test_new_organization("hash");
        new_org.id = Some(OrganizationId::from("organization-1"));

        let organization = repo.create(&new_org).await.unwrap();

        assert_eq!(organization.id.as_str(), "organization-1");
    }

    #[tokio::test]
    async fn create_rejects_duplicate_email() {
        let repo = InMemoryOrganizationRepository::new();
        repo.create(&test_new_organization("hash")).await.unwrap();

        let result = repo.create(&test_new_organization("other-hash")).await;

        assert!(matches!(result, Err(DomainError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn create_rejects_empty_password_hash() {
        let repo = InMemoryOrganizationRepository::new();

        let result = repo.create(&test_new_organization("")).await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn lookups_return_none_when_absent() {
        let repo = InMemoryOrganizationRepository::new();

        assert!(repo.find_by_email("nobody@example.com").await.unwrap().is_none());
        assert!(repo
            .find_by_id(&OrganizationId::from("missing"))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn pet_create_stores_pet() {
        let repo = InMemoryPetRepository::new();

        let pet = repo
            .create(&test_new_pet(OrganizationId::from("organization-1")))
            .await
            .unwrap();

        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get(&pet.id).unwrap().name, pet.name);
    }
}
