//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::Utc;

use crate::domain::entities::{
    EnergyLevel, NewOrganization, NewPet, Organization, OrganizationId, PetAge, PetSize,
};

/// Password whose hash is stored by `test_organization`
pub const TEST_PASSWORD: &str = "1234567";

/// Create a new-organization payload carrying the given password hash
pub fn test_new_organization(password_hash: &str) -> NewOrganization {
    NewOrganization {
        id: None,
        name: "ORG Test".to_string(),
        responsable_name: "John Doe".to_string(),
        email: "johndoe@example.com".to_string(),
        password_hash: password_hash.to_string(),
        address: "Rua dos testes".to_string(),
        city: "Typescript City".to_string(),
        postal_code: "92000000".to_string(),
    }
}

/// Create a test organization whose password is `TEST_PASSWORD`
pub fn test_organization() -> Organization {
    test_organization_with_id(&OrganizationId::new().0)
}

/// Create a test organization with a specific id
pub fn test_organization_with_id(id: &str) -> Organization {
    Organization {
        id: OrganizationId::from(id),
        name: "ORG Test".to_string(),
        responsable_name: "John Doe".to_string(),
        email: format!("{}@example.com", id),
        password_hash: bcrypt::hash(TEST_PASSWORD, 4).unwrap(),
        address: "Rua dos testes".to_string(),
        city: "Typescript City".to_string(),
        postal_code: "92000000".to_string(),
        created_at: Utc::now(),
    }
}

/// Create a new-pet payload for an organization
pub fn test_new_pet(organization_id: OrganizationId) -> NewPet {
    NewPet {
        name: "Rex".to_string(),
        description: Some("Pet muito calmo".to_string()),
        age: PetAge::Puppy,
        energy_level: EnergyLevel::Calm,
        size: PetSize::Medium,
        organization_id,
    }
}
