//! Bearer-token issuing and validation.
//!
//! The `TokenService` owns the signing keys and is constructed once from
//! configuration, then handed to request handlers through `AppState` -- there
//! is no ambient signing secret. Besides access tokens it mints the
//! short-lived state tokens that protect the OAuth callback against forgery.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::{auth::AuthError, AppError},
    model::user::{Role, User},
};

/// Lifetime of an access token.
const TOKEN_TTL_HOURS: i64 = 24;

/// Lifetime of an OAuth state token; long enough to complete the provider
/// round-trip, short enough to limit replay.
const STATE_TTL_MINUTES: i64 = 10;

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// ID of the authenticated user.
    pub sub: i32,
    /// Role of the user at issue time.
    pub role: Role,
    /// Unique token ID, used for revocation.
    pub jti: String,
    /// Issue time as a Unix timestamp.
    pub iat: i64,
    /// Expiry as a Unix timestamp.
    pub exp: i64,
}

/// Claims carried by an OAuth state token.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StateClaims {
    /// Marks the token as an OAuth state token so an access token cannot be
    /// replayed as one.
    purpose: String,
    /// Random nonce making every state value unique.
    nonce: String,
    /// Expiry as a Unix timestamp.
    exp: i64,
}

const STATE_PURPOSE: &str = "oauth_state";

/// Service for minting and validating signed tokens.
///
/// Cheap to clone; both keys are reference-counted internally.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    /// Creates a token service from the configured HS256 secret.
    ///
    /// # Arguments
    /// - `secret` - Shared secret used for signing and validation
    ///
    /// # Returns
    /// - `TokenService` - Service ready to issue and validate tokens
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issues an access token for a user.
    ///
    /// The token carries the user's ID and role, a fresh `jti` for revocation,
    /// and expires after `TOKEN_TTL_HOURS`.
    ///
    /// # Arguments
    /// - `user` - User to issue the token for
    ///
    /// # Returns
    /// - `Ok(String)` - Signed token
    /// - `Err(AppError::JwtErr)` - Signing failed
    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id,
            role: user.role,
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        };

        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }

    /// Validates an access token and returns its claims.
    ///
    /// Checks the signature and expiry; revocation is checked separately
    /// against the blacklist by the auth guard.
    ///
    /// # Arguments
    /// - `token` - Bearer token string without the `Bearer ` prefix
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AuthError::InvalidToken)` - Signature or expiry check failed
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }

    /// Mints a state token for an OAuth login flow.
    ///
    /// The returned string is used verbatim as the OAuth `state` parameter and
    /// validated in the callback, giving the CSRF check without server-side
    /// session storage.
    ///
    /// # Returns
    /// - `Ok(String)` - Signed state token
    /// - `Err(AppError::JwtErr)` - Signing failed
    pub fn issue_state(&self) -> Result<String, AppError> {
        let claims = StateClaims {
            purpose: STATE_PURPOSE.to_string(),
            nonce: Uuid::new_v4().to_string(),
            exp: (Utc::now() + Duration::minutes(STATE_TTL_MINUTES)).timestamp(),
        };

        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }

    /// Validates the state parameter of an OAuth callback.
    ///
    /// # Arguments
    /// - `state` - The `state` query parameter from the callback URL
    ///
    /// # Returns
    /// - `Ok(())` - State was minted by this service and has not expired
    /// - `Err(AuthError::StateMismatch)` - Forged, replayed, or expired state
    pub fn verify_state(&self, state: &str) -> Result<(), AuthError> {
        let data = decode::<StateClaims>(state, &self.decoding_key, &Validation::default())
            .map_err(|_| AuthError::StateMismatch)?;

        if data.claims.purpose != STATE_PURPOSE {
            return Err(AuthError::StateMismatch);
        }

        Ok(())
    }
}
