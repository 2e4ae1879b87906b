//! Authenticate use case
//!
//! Checks an organization's email and password.

use std::sync::Arc;

use crate::domain::entities::Organization;
use crate::domain::ports::{OrganizationRepository, PasswordHasher};
use crate::error::AppError;

/// Input for `AuthenticateUseCase::execute`
#[derive(Debug, Clone)]
pub struct AuthenticateRequest {
    pub email: String,
    pub password: String,
}

/// Output of a successful authentication
#[derive(Debug, Clone)]
pub struct AuthenticateResponse {
    pub organization: Organization,
}

/// Validates organization credentials
pub struct AuthenticateUseCase<OR, PH>
where
    OR: OrganizationRepository,
    PH: PasswordHasher,
{
    organizations: Arc<OR>,
    hasher: Arc<PH>,
}

impl<OR, PH> AuthenticateUseCase<OR, PH>
where
    OR: OrganizationRepository,
    PH: PasswordHasher,
{
    pub fn new(organizations: Arc<OR>, hasher: Arc<PH>) -> Self {
        Self {
            organizations,
            hasher,
        }
    }

    /// Authenticate an organization
    ///
    /// Fails with `AppError::InvalidCredentials` both when no organization has the
    /// email and when the password does not match, so callers cannot tell which
    /// emails are registered.
    pub async fn execute(
        &self,
        request: AuthenticateRequest,
    ) -> Result<AuthenticateResponse, AppError> {
        tracing::debug!("Authenticating organization");

        let Some(organization) = self.organizations.find_by_email(&request.email).await? else {
            tracing::warn!("Rejected organization credentials");
            return Err(AppError::InvalidCredentials);
        };

        if !self
            .hasher
            .verify(&request.password, &organization.password_hash)
            .await?
        {
            tracing::warn!("Rejected organization credentials");
            return Err(AppError::InvalidCredentials);
        }

        tracing::info!(organization_id = %organization.id, "Organization authenticated");

        Ok(AuthenticateResponse { organization })
    }
}
