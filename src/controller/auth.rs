use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{
    data::revoked_token::RevokedTokenRepository,
    dto::{api::ErrorDto, auth::LoginResponseDto},
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
    model::user::Provider,
    service::{auth::OAuthService, user::UserService},
    state::AppState,
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `state` - Signed state token minted when the login flow started
/// - `code` - Authorization code used to exchange for access tokens
#[derive(Deserialize)]
pub struct CallbackParams {
    /// State token to be validated against the signing key.
    pub state: String,
    /// Authorization code from the provider for token exchange.
    pub code: String,
}

/// Start an OAuth login flow.
///
/// Redirects to the provider's authorization page. The `state` parameter is a
/// short-lived signed token validated in the callback.
///
/// # Returns
/// - `307 Temporary Redirect` - To the provider's authorization URL
/// - `400 Bad Request` - Unknown provider
#[utoipa::path(
    get,
    path = "/api/auth/{provider}/login",
    tag = AUTH_TAG,
    params(
        ("provider" = String, Path, description = "OAuth provider (github or google)")
    ),
    responses(
        (status = 307, description = "Redirect to the provider's authorization page"),
        (status = 400, description = "Unsupported provider", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Path(provider): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let provider =
        Provider::from_path(&provider).ok_or(AuthError::UnsupportedProvider(provider))?;

    let auth_service = OAuthService::new(
        &state.http_client,
        state.oauth_client(provider),
        provider,
    );

    let csrf_state = state.tokens.issue_state()?;
    let url = auth_service.login_url(csrf_state);

    Ok(Redirect::temporary(url.as_str()))
}

/// Complete an OAuth login flow.
///
/// Validates the state token, exchanges the authorization code, fetches the
/// provider identity, registers the user (or recognizes a returning one), and
/// returns a bearer token together with the user.
///
/// # Returns
/// - `200 OK` - Token and user
/// - `400 Bad Request` - Unknown provider or state validation failure
/// - `500 Internal Server Error` - Code exchange or database error
#[utoipa::path(
    get,
    path = "/api/auth/{provider}/callback",
    tag = AUTH_TAG,
    params(
        ("provider" = String, Path, description = "OAuth provider (github or google)"),
        ("code" = String, Query, description = "Authorization code from the provider"),
        ("state" = String, Query, description = "State token from the login redirect")
    ),
    responses(
        (status = 200, description = "Token and user", body = LoginResponseDto),
        (status = 400, description = "Unsupported provider or state mismatch", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    Path(provider): Path<String>,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let provider =
        Provider::from_path(&provider).ok_or(AuthError::UnsupportedProvider(provider))?;

    state.tokens.verify_state(&params.state)?;

    let auth_service = OAuthService::new(
        &state.http_client,
        state.oauth_client(provider),
        provider,
    );
    let user_service = UserService::new(&state.db);

    let identity = auth_service.callback(params.code).await?;
    let user = user_service.register(identity).await?;
    user_service.update_last_login(user.id).await?;

    let token = state.tokens.issue(&user)?;

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            token,
            user: user.into_dto(),
        }),
    ))
}

/// Revoke the presented bearer token.
///
/// The token's ID goes on the blacklist until its natural expiry, after which
/// the cleanup job purges the row.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `204 No Content` - Token revoked
/// - `401 Unauthorized` - Missing, invalid, or already revoked token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Token revoked"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.tokens)
        .claims(&headers)
        .await?;

    let expires_at = DateTime::<Utc>::from_timestamp(claims.exp, 0).unwrap_or_else(Utc::now);

    RevokedTokenRepository::new(&state.db)
        .revoke(claims.jti, expires_at)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
