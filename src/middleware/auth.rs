//! Bearer-token authentication guard.
//!
//! Handlers construct an `AuthGuard` and call `require` with the permissions
//! the endpoint demands. The guard validates the `Authorization: Bearer`
//! header, rejects revoked tokens, loads the user to confirm the account is
//! still active, and returns the resulting `Principal`. A request without a
//! valid credential never reaches a service method.

use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::{
    data::{revoked_token::RevokedTokenRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{auth::Principal, user::Role},
    service::token::{Claims, TokenService},
};

/// Permissions an endpoint can demand beyond plain authentication.
pub enum Permission {
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Authenticates the request and checks the required permissions.
    ///
    /// The principal's role comes from a fresh user lookup rather than the
    /// token claims, so role changes and deactivations take effect on the
    /// next request instead of at token expiry.
    ///
    /// # Arguments
    /// - `headers` - Request headers carrying the bearer token
    /// - `permissions` - Permissions the endpoint requires, may be empty
    ///
    /// # Returns
    /// - `Ok(Principal)` - Authenticated actor with their current role
    /// - `Err(AppError::AuthErr)` - Missing/invalid/revoked token, unknown or
    ///   deactivated user, or missing permission
    pub async fn require(
        &self,
        headers: &HeaderMap,
        permissions: &[Permission],
    ) -> Result<Principal, AppError> {
        let claims = self.claims(headers).await?;

        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(claims.sub).await? else {
            return Err(AuthError::UserNotFound(claims.sub).into());
        };

        if !user.is_active {
            return Err(AuthError::AccountDisabled(user.id).into());
        }

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if user.role != Role::Admin {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "admin permission required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(Principal {
            user_id: user.id,
            role: user.role,
        })
    }

    /// Extracts and validates the bearer token, returning its claims.
    ///
    /// Used directly by the logout endpoint, which needs the `jti` rather
    /// than a principal.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Valid, unrevoked token
    /// - `Err(AppError::AuthErr)` - Missing, invalid, or revoked token
    pub async fn claims(&self, headers: &HeaderMap) -> Result<Claims, AppError> {
        let token = bearer_token(headers).ok_or(AuthError::MissingToken)?;

        let claims = self.tokens.verify(token)?;

        if RevokedTokenRepository::new(self.db)
            .is_revoked(&claims.jti)
            .await?
        {
            return Err(AuthError::TokenRevoked.into());
        }

        Ok(claims)
    }
}

/// Pulls the token out of the `Authorization: Bearer` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
