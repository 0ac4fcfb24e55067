use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::{Provider, Role};

/// A platform user.
///
/// The provider-side account ID is internal and never serialized.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub provider: Provider,
    pub avatar: String,
    pub bio: String,
    pub role: Role,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Request body for updating the caller's own profile.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateProfileDto {
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar: String,
}

/// Request body for changing a user's role.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SetRoleDto {
    pub role: Role,
}

/// Paginated collection of users with metadata.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedUsersDto {
    pub users: Vec<UserDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
