use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header was present on the request.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No authorization header provided")]
    MissingToken,

    /// The bearer token failed signature or expiry validation.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid bearer token")]
    InvalidToken,

    /// The bearer token was revoked before its natural expiry.
    ///
    /// Raised when the token's `jti` is present in the revocation table, for
    /// example after logout. Results in a 401 Unauthorized response.
    #[error("Bearer token has been revoked")]
    TokenRevoked,

    /// The authenticated user no longer exists in the database.
    ///
    /// Results in a 404 Not Found response.
    #[error("User {0} not found in database")]
    UserNotFound(i32),

    /// The authenticated user's account has been deactivated.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} is deactivated")]
    AccountDisabled(i32),

    /// The user lacks a required permission for the endpoint.
    ///
    /// Results in a 403 Forbidden response. The reason string is logged, not
    /// sent to the client.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// The OAuth provider in the URL is not one the service supports.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Unsupported OAuth provider: {0}")]
    UnsupportedProvider(String),

    /// The OAuth callback state token failed validation.
    ///
    /// The state parameter is a short-lived signed token minted when the login
    /// flow started; a mismatch indicates a forged or expired callback.
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to OAuth state mismatch")]
    StateMismatch,

    /// Exchanging the authorization code for an access token failed.
    ///
    /// Results in a 500 Internal Server Error with the provider error logged
    /// server-side.
    #[error("OAuth code exchange failed: {0}")]
    TokenExchange(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Token-level failures map to 401 so clients know to re-authenticate;
/// permission and account-state failures map to 403; provider and state
/// problems in the OAuth flow map to 400. All errors are logged at debug
/// level while keeping client-facing messages generic.
///
/// # Returns
/// - 400 Bad Request - For `UnsupportedProvider` and `StateMismatch`
/// - 401 Unauthorized - For `MissingToken`, `InvalidToken`, `TokenRevoked`
/// - 403 Forbidden - For `AccountDisabled` and `AccessDenied`
/// - 404 Not Found - For `UserNotFound`
/// - 500 Internal Server Error - For `TokenExchange`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Auth error: {}", self);

        let (status, message) = match &self {
            Self::MissingToken | Self::InvalidToken | Self::TokenRevoked => (
                StatusCode::UNAUTHORIZED,
                "Authentication required".to_string(),
            ),
            Self::UserNotFound(_) => (StatusCode::NOT_FOUND, "User not found".to_string()),
            Self::AccountDisabled(_) | Self::AccessDenied(..) => {
                (StatusCode::FORBIDDEN, "Access denied".to_string())
            }
            Self::UnsupportedProvider(provider) => (
                StatusCode::BAD_REQUEST,
                format!("Unsupported OAuth provider: {}", provider),
            ),
            Self::StateMismatch => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.".to_string(),
            ),
            Self::TokenExchange(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status, Json(ErrorDto::new(status.as_u16(), message))).into_response()
    }
}
