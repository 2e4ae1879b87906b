//! PostgreSQL adapter for OrganizationRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr,
};

use crate::domain::entities::{NewOrganization, Organization, OrganizationId};
use crate::domain::ports::OrganizationRepository;
use crate::entity::organizations;
use crate::error::DomainError;

/// PostgreSQL implementation of OrganizationRepository
pub struct PostgresOrganizationRepository {
    db: DatabaseConnection,
}

impl PostgresOrganizationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrganizationRepository for PostgresOrganizationRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Organization>, DomainError> {
        let result = organizations::Entity::find()
            .filter(organizations::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_id(&self, id: &OrganizationId) -> Result<Option<Organization>, DomainError> {
        let result = organizations::Entity::find_by_id(id.0.clone())
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, organization: &NewOrganization) -> Result<Organization, DomainError> {
        if organization.password_hash.is_empty() {
            return Err(DomainError::Validation(
                "password_hash must not be empty".to_string(),
            ));
        }

        let id = organization.id.clone().unwrap_or_default();
        let now = Utc::now().fixed_offset();

        let model = organizations::ActiveModel {
            id: Set(id.0),
            name: Set(organization.name.clone()),
            responsable_name: Set(organization.responsable_name.clone()),
            email: Set(organization.email.clone()),
            password_hash: Set(organization.password_hash.clone()),
            address: Set(organization.address.clone()),
            city: Set(organization.city.clone()),
            postal_code: Set(organization.postal_code.clone()),
            created_at: Set(Some(now)),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_insert_error(e, &organization.email))?;

        tracing::debug!(organization_id = %result.id, "Organization row inserted");

        Ok(result.into())
    }
}

fn map_insert_error(err: DbErr, email: &str) -> DomainError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::AlreadyExists(format!(
            "Organization with email '{}' already exists",
            email
        )),
        _ => DomainError::Database(err.to_string()),
    }
}

/// Convert SeaORM model to domain entity
impl From<organizations::Model> for Organization {
    fn from(model: organizations::Model) -> Self {
        Organization {
            id: OrganizationId(model.id),
            name: model.name,
            responsable_name: model.responsable_name,
            email: model.email,
            password_hash: model.password_hash,
            address: model.address,
            city: model.city,
            postal_code: model.postal_code,
            created_at: model
                .created_at
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(Utc::now),
        }
    }
}
