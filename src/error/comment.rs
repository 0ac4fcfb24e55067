use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::ErrorDto;

/// Errors raised by comment validation, lookup, and authorization.
#[derive(Error, Debug)]
pub enum CommentError {
    /// Content was blank or whitespace-only on create or update.
    ///
    /// Results in a 400 Bad Request response. Detected before any storage
    /// write is attempted.
    #[error("comment content cannot be empty")]
    EmptyContent,

    /// No live comment exists with the given ID.
    ///
    /// Also raised when a client attempts to mutate a comment whose status is
    /// no longer `active`; deleted and hidden comments are terminal. Results
    /// in a 404 Not Found response.
    #[error("comment {0} not found")]
    NotFound(i32),

    /// The requested parent comment belongs to a different post.
    ///
    /// A reply thread cannot span posts. Results in a 400 Bad Request response.
    #[error("parent comment {parent_id} does not belong to post {post_id}")]
    InvalidParent {
        /// ID of the comment named as parent.
        parent_id: i32,
        /// ID of the post the new comment targets.
        post_id: i32,
    },

    /// The principal is neither the author nor an elevated role.
    ///
    /// Results in a 403 Forbidden response, distinct from authentication
    /// failure.
    #[error("not allowed to modify comment {0}")]
    Unauthorized(i32),
}

/// Converts comment errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `EmptyContent` and `InvalidParent`
/// - 403 Forbidden - For `Unauthorized`
/// - 404 Not Found - For `NotFound`
impl IntoResponse for CommentError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::EmptyContent => (
                StatusCode::BAD_REQUEST,
                "Comment content cannot be empty".to_string(),
            ),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "Comment not found".to_string()),
            Self::InvalidParent { .. } => (
                StatusCode::BAD_REQUEST,
                "Parent comment belongs to a different post".to_string(),
            ),
            Self::Unauthorized(_) => (
                StatusCode::FORBIDDEN,
                "Unauthorized to modify this comment".to_string(),
            ),
        };

        (
            status,
            Json(ErrorDto::new(status.as_u16(), message).with_details(self.to_string())),
        )
            .into_response()
    }
}
