use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::ErrorDto;

/// Errors raised by post validation, lookup, and authorization.
#[derive(Error, Debug)]
pub enum PostError {
    /// Title was blank or whitespace-only on create or update.
    #[error("post title cannot be empty")]
    EmptyTitle,

    /// Markdown content was blank or whitespace-only on create or update.
    #[error("post content cannot be empty")]
    EmptyContent,

    /// No post exists with the given ID or slug.
    #[error("post {0} not found")]
    NotFound(String),

    /// The principal is neither the author nor an elevated role.
    #[error("not allowed to modify post {0}")]
    Unauthorized(i32),
}

/// Converts post errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `EmptyTitle` and `EmptyContent`
/// - 403 Forbidden - For `Unauthorized`
/// - 404 Not Found - For `NotFound`
impl IntoResponse for PostError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::EmptyTitle => (
                StatusCode::BAD_REQUEST,
                "Post title cannot be empty".to_string(),
            ),
            Self::EmptyContent => (
                StatusCode::BAD_REQUEST,
                "Post content cannot be empty".to_string(),
            ),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "Post not found".to_string()),
            Self::Unauthorized(_) => (
                StatusCode::FORBIDDEN,
                "Unauthorized to modify this post".to_string(),
            ),
        };

        (
            status,
            Json(ErrorDto::new(status.as_u16(), message).with_details(self.to_string())),
        )
            .into_response()
    }
}
