use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::ErrorDto,
        comment::{CommentDto, CreateCommentDto, UpdateCommentDto},
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::comment::{CreateCommentParams, UpdateCommentParams},
    service::comment::CommentService,
    state::AppState,
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comments";

/// Get the comment tree of a post.
///
/// Returns the post's root comments ordered newest first, each with replies
/// nested up to the server's depth limit. A post without comments yields an
/// empty array. Publicly accessible.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `post_id` - ID of the post to fetch comments for
///
/// # Returns
/// - `200 OK` - Root comments with nested replies
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Root comments with nested replies", body = Vec<CommentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post_comments(
    State(state): State<AppState>,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CommentService::new(&state.db);

    let comments = service.get_post_comments(post_id).await?;

    Ok((
        StatusCode::OK,
        Json(
            comments
                .into_iter()
                .map(|c| c.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a comment under a post.
///
/// Creates a root comment, or a reply when `parent_id` is given. The author
/// is always the authenticated principal; authorship in the payload is not
/// accepted.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `post_id` - ID of the post to comment on
/// - `payload` - Comment content and optional parent
///
/// # Returns
/// - `201 Created` - Successfully created comment
/// - `400 Bad Request` - Blank content or parent on a different post
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - Parent comment does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Successfully created comment", body = CommentDto),
        (status = 400, description = "Invalid comment data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Parent comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(post_id): Path<i32>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[])
        .await?;

    let service = CommentService::new(&state.db);

    let params = CreateCommentParams {
        post_id,
        author_id: principal.user_id,
        parent_id: payload.parent_id,
        content: payload.content,
    };

    let comment = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

/// Update a comment's content.
///
/// Only the comment's author, a moderator, or an admin may update it. Only
/// the content changes; threading, status, and authorship are preserved.
///
/// # Access Control
/// - Author, moderator, or admin
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `id` - ID of the comment to update
/// - `payload` - New content
///
/// # Returns
/// - `200 OK` - Successfully updated comment
/// - `400 Bad Request` - Blank content
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Principal may not modify this comment
/// - `404 Not Found` - Comment not found or no longer active
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/comments/{id}",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Comment ID")
    ),
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Successfully updated comment", body = CommentDto),
        (status = 400, description = "Invalid comment data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to modify this comment", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn update_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[])
        .await?;

    let service = CommentService::new(&state.db);

    let params = UpdateCommentParams {
        id,
        content: payload.content,
    };

    let comment = service.update(params, principal).await?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}

/// Delete a comment and its reply subtree.
///
/// Soft-deletes the comment and every transitive reply in one atomic
/// operation; records are marked deleted, never removed.
///
/// # Access Control
/// - Author, moderator, or admin
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `id` - ID of the comment to delete
///
/// # Returns
/// - `204 No Content` - Comment and descendants marked deleted
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Principal may not modify this comment
/// - `404 Not Found` - Comment not found or no longer active
/// - `500 Internal Server Error` - Database error; no record was changed
#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 204, description = "Comment and descendants deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to modify this comment", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[])
        .await?;

    let service = CommentService::new(&state.db);

    service.delete(id, principal).await?;

    Ok(StatusCode::NO_CONTENT)
}
