//! PostgreSQL adapter for PetRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use crate::domain::entities::{NewPet, OrganizationId, Pet, PetId};
use crate::domain::ports::PetRepository;
use crate::entity::pets;
use crate::error::DomainError;

/// PostgreSQL implementation of PetRepository
pub struct PostgresPetRepository {
    db: DatabaseConnection,
}

impl PostgresPetRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PetRepository for PostgresPetRepository {
    async fn create(&self, pet: &NewPet) -> Result<Pet, DomainError> {
        let id = PetId::new();
        let now = Utc::now().fixed_offset();

        let model = pets::ActiveModel {
            id: Set(id.0),
            name: Set(pet.name.clone()),
            description: Set(pet.description.clone()),
            age: Set(pet.age.to_string()),
            energy_level: Set(pet.energy_level.to_string()),
            size: Set(pet.size.to_string()),
            organization_id: Set(pet.organization_id.0.clone()),
            created_at: Set(Some(now)),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.try_into()
    }
}

/// Convert SeaORM model to domain entity
///
/// Enum columns hold the lowercase names written by `create`; anything else
/// means the row was written by something other than this adapter.
impl TryFrom<pets::Model> for Pet {
    type Error = DomainError;

    fn try_from(model: pets::Model) -> Result<Self, Self::Error> {
        Ok(Pet {
            id: PetId(model.id),
            name: model.name,
            description: model.description,
            age: model.age.parse().map_err(DomainError::Internal)?,
            energy_level: model.energy_level.parse().map_err(DomainError::Internal)?,
            size: model.size.parse().map_err(DomainError::Internal)?,
            organization_id: OrganizationId(model.organization_id),
            created_at: model
                .created_at
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(Utc::now),
        })
    }
}
