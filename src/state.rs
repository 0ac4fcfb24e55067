//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources
//! and dependencies needed by the application. The state is initialized once
//! during startup and then cloned for each request handler through Axum's
//! state extraction. Every dependency is owned here and injected explicitly;
//! there are no process-wide singletons.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use crate::{model::user::Provider, service::token::TokenService};

/// Type alias for an OAuth2 client with auth and token endpoints configured.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// This struct holds all the shared state that needs to be accessible across
/// request handlers. It is initialized once during server startup and then
/// cloned (cheaply, as it contains reference-counted or cloneable types) for
/// each incoming request via Axum's state extraction.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `OAuth2Client` is designed to be cloned
/// - `TokenService` holds reference-counted keys
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for making external API requests.
    ///
    /// Configured with security settings (no redirects) to prevent SSRF
    /// vulnerabilities. Used for OAuth provider user-info calls.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the GitHub login flow.
    pub github_oauth: OAuth2Client,

    /// OAuth2 client for the Google login flow.
    pub google_oauth: OAuth2Client,

    /// Service minting and validating bearer tokens.
    pub tokens: TokenService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// This constructor is called once during server startup after all
    /// dependencies have been initialized. The resulting state is then
    /// provided to the Axum router for use in request handlers.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `github_oauth` - OAuth2 client for GitHub authentication
    /// - `google_oauth` - OAuth2 client for Google authentication
    /// - `tokens` - Bearer token service
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        github_oauth: OAuth2Client,
        google_oauth: OAuth2Client,
        tokens: TokenService,
    ) -> Self {
        Self {
            db,
            http_client,
            github_oauth,
            google_oauth,
            tokens,
        }
    }

    /// Returns the OAuth2 client for the given provider.
    pub fn oauth_client(&self, provider: Provider) -> &OAuth2Client {
        match provider {
            Provider::Github => &self.github_oauth,
            Provider::Google => &self.google_oauth,
        }
    }
}
