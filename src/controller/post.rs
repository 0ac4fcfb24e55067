use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    controller::PaginationParams,
    dto::{
        api::ErrorDto,
        post::{CreatePostDto, PaginatedPostsDto, PostDto, UpdatePostDto},
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::post::{CreatePostParams, UpdatePostParams},
    service::post::PostService,
    state::AppState,
};

/// Tag for grouping post endpoints in OpenAPI documentation
pub static POST_TAG: &str = "posts";

/// Get paginated posts, newest first. Publicly accessible.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Pagination parameters (page and entries)
///
/// # Returns
/// - `200 OK` - Paginated list of posts
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = POST_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Paginated list of posts", body = PaginatedPostsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = PostService::new(&state.db);

    let posts = service.list(params.page, params.entries).await?;

    Ok((StatusCode::OK, Json(posts.into_dto())))
}

/// Get a post by ID. Publicly accessible.
///
/// Each successful fetch counts as a view.
///
/// # Returns
/// - `200 OK` - The post
/// - `404 Not Found` - No post with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    tag = POST_TAG,
    params(
        ("id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "The post", body = PostDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PostService::new(&state.db);

    let post = service.get(id).await?;
    service.increment_view_count(id).await?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

/// Get a post by its slug. Publicly accessible.
///
/// # Returns
/// - `200 OK` - The post
/// - `404 Not Found` - No post with that slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/posts/slug/{slug}",
    tag = POST_TAG,
    params(
        ("slug" = String, Path, description = "Post slug")
    ),
    responses(
        (status = 200, description = "The post", body = PostDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = PostService::new(&state.db);

    let post = service.get_by_slug(&slug).await?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

/// Get all posts carrying a tag, newest first. Publicly accessible.
///
/// # Returns
/// - `200 OK` - Posts carrying the tag (possibly empty)
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/posts/tag/{tag}",
    tag = POST_TAG,
    params(
        ("tag" = String, Path, description = "Tag to filter by")
    ),
    responses(
        (status = 200, description = "Posts carrying the tag", body = Vec<PostDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_posts_by_tag(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = PostService::new(&state.db);

    let posts = service.get_by_tag(&tag).await?;

    Ok((
        StatusCode::OK,
        Json(posts.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a post.
///
/// The post is created as a draft with the authenticated principal as author;
/// the slug and rendered HTML are derived server-side.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `201 Created` - Successfully created post
/// - `400 Bad Request` - Blank title or content
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = POST_TAG,
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Successfully created post", body = PostDto),
        (status = 400, description = "Invalid post data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn create_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[])
        .await?;

    let service = PostService::new(&state.db);

    let params = CreatePostParams {
        author_id: principal.user_id,
        title: payload.title,
        description: payload.description,
        raw_content: payload.raw_content,
        tags: payload.tags,
    };

    let post = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(post.into_dto())))
}

/// Update a post.
///
/// Only the post's author, a moderator, or an admin may update it. The first
/// transition to `published` stamps the publication time.
///
/// # Access Control
/// - Author, moderator, or admin
///
/// # Returns
/// - `200 OK` - Successfully updated post
/// - `400 Bad Request` - Blank title or content
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Principal may not modify this post
/// - `404 Not Found` - Post not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    tag = POST_TAG,
    params(
        ("id" = i32, Path, description = "Post ID")
    ),
    request_body = UpdatePostDto,
    responses(
        (status = 200, description = "Successfully updated post", body = PostDto),
        (status = 400, description = "Invalid post data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to modify this post", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn update_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[])
        .await?;

    let service = PostService::new(&state.db);

    let params = UpdatePostParams {
        id,
        title: payload.title,
        description: payload.description,
        raw_content: payload.raw_content,
        tags: payload.tags,
        status: payload.status,
    };

    let post = service.update(params, principal).await?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

/// Delete a post.
///
/// # Access Control
/// - Author, moderator, or admin
///
/// # Returns
/// - `204 No Content` - Successfully deleted post
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Principal may not modify this post
/// - `404 Not Found` - Post not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    tag = POST_TAG,
    params(
        ("id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted post"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to modify this post", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn delete_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[])
        .await?;

    let service = PostService::new(&state.db);

    service.delete(id, principal).await?;

    Ok(StatusCode::NO_CONTENT)
}
