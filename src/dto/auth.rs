use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::user::UserDto;

/// Response body of a successful OAuth callback.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LoginResponseDto {
    /// Bearer token to present on authenticated requests.
    pub token: String,
    pub user: UserDto,
}
