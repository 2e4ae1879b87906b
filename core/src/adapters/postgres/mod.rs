//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod organization_repo;
pub mod pet_repo;


pub use organization_repo::PostgresOrganizationRepository;
pub use pet_repo::PostgresPetRepository;
