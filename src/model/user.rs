//! User domain models and parameters.
//!
//! Provides domain models for platform users with OAuth identity and role
//! tracking. Includes parameter types for registration and profile updates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::user::UserDto;

/// Access level of a user, from unauthenticated guest up to administrator.
///
/// Roles form a hierarchy: `Moderator` and `Admin` may mutate resources they
/// do not own; everyone else is limited to their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Guest,
    User,
    Verified,
    Moderator,
    Admin,
}

impl Role {
    /// Converts an entity role to the domain role.
    pub fn from_entity(entity: entity::user::UserRole) -> Self {
        match entity {
            entity::user::UserRole::Guest => Self::Guest,
            entity::user::UserRole::User => Self::User,
            entity::user::UserRole::Verified => Self::Verified,
            entity::user::UserRole::Moderator => Self::Moderator,
            entity::user::UserRole::Admin => Self::Admin,
        }
    }

    /// Converts the domain role to its entity counterpart for persistence.
    pub fn into_entity(self) -> entity::user::UserRole {
        match self {
            Self::Guest => entity::user::UserRole::Guest,
            Self::User => entity::user::UserRole::User,
            Self::Verified => entity::user::UserRole::Verified,
            Self::Moderator => entity::user::UserRole::Moderator,
            Self::Admin => entity::user::UserRole::Admin,
        }
    }
}

/// OAuth provider an account was registered through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Github,
    Google,
}

impl Provider {
    /// Parses a provider from its URL path segment.
    ///
    /// # Returns
    /// - `Some(Provider)` - Recognized provider name
    /// - `None` - Unknown provider
    pub fn from_path(value: &str) -> Option<Self> {
        match value {
            "github" => Some(Self::Github),
            "google" => Some(Self::Google),
            _ => None,
        }
    }

    pub fn from_entity(entity: entity::user::AuthProvider) -> Self {
        match entity {
            entity::user::AuthProvider::Github => Self::Github,
            entity::user::AuthProvider::Google => Self::Google,
        }
    }

    pub fn into_entity(self) -> entity::user::AuthProvider {
        match self {
            Self::Github => entity::user::AuthProvider::Github,
            Self::Google => entity::user::AuthProvider::Google,
        }
    }
}

/// User with OAuth identity, profile data, and role.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// OAuth provider the account was registered through.
    pub provider: Provider,
    /// User's ID at the provider.
    pub provider_id: String,
    /// URL of the user's avatar image, empty if none.
    pub avatar: String,
    pub bio: String,
    pub role: Role,
    /// Deactivated accounts cannot authenticate.
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            provider: Provider::from_entity(entity.provider),
            provider_id: entity.provider_id,
            avatar: entity.avatar,
            bio: entity.bio,
            role: Role::from_entity(entity.role),
            is_active: entity.is_active,
            last_login: entity.last_login,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            provider: self.provider,
            avatar: self.avatar,
            bio: self.bio,
            role: self.role,
            is_active: self.is_active,
            last_login: self.last_login,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a user during OAuth registration.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub provider: Provider,
    pub provider_id: String,
    pub avatar: String,
}

/// Parameters for updating a user's own profile.
#[derive(Debug, Clone)]
pub struct UpdateProfileParams {
    pub id: i32,
    pub bio: String,
    pub avatar: String,
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    /// Users for this page.
    pub users: Vec<User>,
    /// Total number of users across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of users per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedUsers {
    /// Converts the paginated users domain model to a DTO for API responses.
    pub fn into_dto(self) -> crate::dto::user::PaginatedUsersDto {
        crate::dto::user::PaginatedUsersDto {
            users: self.users.into_iter().map(|u| u.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
