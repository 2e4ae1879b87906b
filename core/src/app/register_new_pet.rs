//! Register-new-pet use case
//!
//! Lists a new pet under an existing organization.

use std::sync::Arc;

use crate::domain::entities::{EnergyLevel, NewPet, OrganizationId, Pet, PetAge, PetSize};
use crate::domain::ports::{OrganizationRepository, PetRepository};
use crate::error::AppError;

/// Input for `RegisterNewPetUseCase::execute`
///
/// The enumerated fields are already typed, so out-of-domain values are rejected
/// when the caller parses its input and never reach the use case.
#[derive(Debug, Clone)]
pub struct RegisterNewPetRequest {
    pub name: String,
    pub description: Option<String>,
    pub age: PetAge,
    pub energy_level: EnergyLevel,
    pub size: PetSize,
    pub organization_id: OrganizationId,
}

/// Output of a successful registration
#[derive(Debug, Clone)]
pub struct RegisterNewPetResponse {
    pub pet: Pet,
}

/// Creates pets owned by an organization
pub struct RegisterNewPetUseCase<OR, PR>
where
    OR: OrganizationRepository,
    PR: PetRepository,
{
    organizations: Arc<OR>,
    pets: Arc<PR>,
}

impl<OR, PR> RegisterNewPetUseCase<OR, PR>
where
    OR: OrganizationRepository,
    PR: PetRepository,
{
    pub fn new(organizations: Arc<OR>, pets: Arc<PR>) -> Self {
        Self {
            organizations,
            pets,
        }
    }

    /// Register a new pet
    ///
    /// Fails with `AppError::ResourceNotFound` when the organization does not exist.
    /// Nothing is written in that case.
    pub async fn execute(
        &self,
        request: RegisterNewPetRequest,
    ) -> Result<RegisterNewPetResponse, AppError> {
        if self
            .organizations
            .find_by_id(&request.organization_id)
            .await?
            .is_none()
        {
            tracing::warn!(
                organization_id = %request.organization_id,
                "Pet registration for unknown organization"
            );
            return Err(AppError::ResourceNotFound);
        }

        let new_pet = NewPet {
            name: request.name,
            description: request.description,
            age: request.age,
            energy_level: request.energy_level,
            size: request.size,
            organization_id: request.organization_id,
        };

        let pet = self.pets.create(&new_pet).await?;

        tracing::info!(
            pet_id = %pet.id,
            organization_id = %pet.organization_id,
            "Pet registered"
        );

        Ok(RegisterNewPetResponse { pet })
    }
}
