//! Authentication domain models.

use crate::model::user::{Provider, Role};

/// The authenticated actor making a request.
///
/// Produced by the auth guard from a validated bearer token and a fresh user
/// lookup; handlers stamp authorship from this, never from request payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub user_id: i32,
    pub role: Role,
}

/// Normalized user data returned by an OAuth provider.
///
/// Each provider's response payload is deserialized into its own typed struct
/// and converted into this single shape before it reaches user registration.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalIdentity {
    /// Provider the identity came from.
    pub provider: Provider,
    /// User's ID at the provider.
    pub id: String,
    /// Login or display name at the provider.
    pub login: String,
    pub email: String,
    /// Avatar URL, empty if the provider returned none.
    pub avatar_url: String,
}
