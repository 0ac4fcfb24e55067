use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    dto::{
        api::ErrorDto,
        post::PostDto,
        user::{PaginatedUsersDto, SetRoleDto, UpdateProfileDto, UserDto},
    },
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::user::{Role, UpdateProfileParams},
    service::{post::PostService, user::UserService},
    state::AppState,
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "users";

/// Query parameters for the admin user listing.
#[derive(Deserialize)]
pub struct ListUsersParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    /// When set, returns only users with this role (unpaginated).
    pub role: Option<Role>,
}

fn default_entries() -> u64 {
    10
}

/// Get a user's public profile. Publicly accessible.
///
/// # Returns
/// - `200 OK` - The user
/// - `404 Not Found` - No user with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service.get(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Get a user's posts, newest first. Publicly accessible.
///
/// # Returns
/// - `200 OK` - The user's posts (possibly empty)
/// - `404 Not Found` - No user with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/{id}/posts",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user's posts", body = Vec<PostDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_posts(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user_service = UserService::new(&state.db);
    let post_service = PostService::new(&state.db);

    // 404 for unknown users rather than an empty list
    let user = user_service.get(id).await?;
    let posts = post_service.get_by_author(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(posts.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get the authenticated user's own profile.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - The caller's profile
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The caller's profile", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[])
        .await?;

    let service = UserService::new(&state.db);

    let user = service.get(principal.user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update the authenticated user's own profile (bio and avatar).
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Updated profile
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/users/me",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn update_current_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[])
        .await?;

    let service = UserService::new(&state.db);

    let user = service
        .update_profile(UpdateProfileParams {
            id: principal.user_id,
            bio: payload.bio,
            avatar: payload.avatar,
        })
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// List users, paginated or filtered by role.
///
/// # Access Control
/// - `Admin` - Only admins can list users
///
/// # Returns
/// - `200 OK` - Paginated users, or all users with the requested role
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("role" = Option<String>, Query, description = "Return only users with this role")
    ),
    responses(
        (status = 200, description = "Users", body = PaginatedUsersDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn list_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListUsersParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[Permission::Admin])
        .await?;

    let service = UserService::new(&state.db);

    let users = match params.role {
        Some(role) => {
            let users = service.list_by_role(role).await?;
            let total = users.len() as u64;
            crate::model::user::PaginatedUsers {
                users,
                total,
                page: 0,
                per_page: total,
                total_pages: 1,
            }
        }
        None => service.list(params.page, params.entries).await?,
    };

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// Promote a user to the verified role.
///
/// # Access Control
/// - `Admin` - Only admins can verify users
///
/// # Returns
/// - `200 OK` - Updated user
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - User not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/users/{id}/verify",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn verify_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[Permission::Admin])
        .await?;

    let service = UserService::new(&state.db);

    let user = service.verify(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Set a user's role.
///
/// # Access Control
/// - `Admin` - Only admins can change roles
///
/// # Returns
/// - `200 OK` - Updated user
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - User not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/users/{id}/role",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = SetRoleDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn set_user_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<SetRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[Permission::Admin])
        .await?;

    let service = UserService::new(&state.db);

    let user = service.set_role(id, payload.role).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Deactivate a user account.
///
/// Deactivated users fail authentication on their next request.
///
/// # Access Control
/// - `Admin` - Only admins can deactivate users
///
/// # Returns
/// - `200 OK` - Updated user
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - User not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/users/{id}/deactivate",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn deactivate_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[Permission::Admin])
        .await?;

    let service = UserService::new(&state.db);

    let user = service.deactivate(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
