//! FindAFriend core
//!
//! Use-case layer of a pet-adoption platform: organizations authenticate and
//! register pets for adoption. Uses hexagonal (ports & adapters) architecture so
//! the use cases only ever see the repository and hashing traits.
//!
//! Transport adapters build an [`AppState`] once and call the use cases on it.

use std::sync::Arc;

use anyhow::Context;
use sea_orm::{Database, DatabaseConnection};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod entity;
pub mod error;



use adapters::{BcryptHasher, PostgresOrganizationRepository, PostgresPetRepository};
use app::{AuthenticateUseCase, RegisterNewPetUseCase};
use config::Config;
use domain::ports::PasswordHasher;
use error::HashError;

/// Use cases wired to their production adapters, shared across callers
#[derive(Clone)]
pub struct AppState {
    pub authenticate: Arc<AuthenticateUseCase<PostgresOrganizationRepository, BcryptHasher>>,
    pub register_new_pet:
        Arc<RegisterNewPetUseCase<PostgresOrganizationRepository, PostgresPetRepository>>,
    pub organization_repo: Arc<PostgresOrganizationRepository>,
    pub pet_repo: Arc<PostgresPetRepository>,
    pub hasher: Arc<BcryptHasher>,
    pub config: Config,
}

impl AppState {
    /// Connect to PostgreSQL and build the use cases
    pub async fn connect(config: Config) -> anyhow::Result<Self> {
        tracing::info!("Connecting to database...");
        let db = Database::connect(&config.database_url)
            .await
            .context("Failed to connect to database")?;
        tracing::info!("Database connected");

        Ok(Self::from_connection(db, config))
    }

    /// Build the use cases over an existing connection
    pub fn from_connection(db: DatabaseConnection, config: Config) -> Self {
        let organization_repo = Arc::new(PostgresOrganizationRepository::new(db.clone()));
        let pet_repo = Arc::new(PostgresPetRepository::new(db));
        let hasher = Arc::new(BcryptHasher::new());

        let authenticate = Arc::new(AuthenticateUseCase::new(
            organization_repo.clone(),
            hasher.clone(),
        ));

        let register_new_pet = Arc::new(RegisterNewPetUseCase::new(
            organization_repo.clone(),
            pet_repo.clone(),
        ));

        Self {
            authenticate,
            register_new_pet,
            organization_repo,
            pet_repo,
            hasher,
            config,
        }
    }

    /// Hash a password with the configured work factor
    pub async fn hash_password(&self, plaintext: &str) -> Result<String, HashError> {
        self.hasher
            .hash(plaintext, self.config.password_hash_cost)
            .await
    }
}

/// Install the global tracing subscriber
///
/// Honours `RUST_LOG`, defaulting to `info,findafriend_core=debug`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,findafriend_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
