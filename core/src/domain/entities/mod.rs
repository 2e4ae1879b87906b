//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod organization;
pub mod pet;

pub use organization::{NewOrganization, Organization, OrganizationId};
pub use pet::{EnergyLevel, NewPet, Pet, PetAge, PetId, PetSize};
