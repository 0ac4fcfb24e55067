//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic
//! for transforming errors into appropriate HTTP responses. The `AppError` enum
//! serves as the top-level error type that wraps domain-specific errors and
//! implements `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod comment;
pub mod config;
pub mod post;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    dto::api::ErrorDto,
    error::{auth::AuthError, comment::CommentError, config::ConfigError, post::PostError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and
/// provides automatic conversion to HTTP responses. Most variants use `#[from]`
/// for automatic error conversion. Domain-specific errors like `CommentError`
/// handle their own response mapping, while generic variants provide standard
/// HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping
    /// (401 Unauthorized, 403 Forbidden, etc.).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Comment validation, lookup, or authorization error.
    ///
    /// Delegates to `CommentError::into_response()`.
    #[error(transparent)]
    CommentErr(#[from] CommentError),

    /// Post validation, lookup, or authorization error.
    ///
    /// Delegates to `PostError::into_response()`.
    #[error(transparent)]
    PostErr(#[from] PostError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest.
    ///
    /// Results in 500 Internal Server Error when external API calls fail.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Token signing error from jsonwebtoken.
    ///
    /// Only reachable while minting tokens; validation failures are mapped to
    /// `AuthError::InvalidToken` instead. Results in 500 Internal Server Error.
    #[error(transparent)]
    JwtErr(#[from] jsonwebtoken::errors::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Socket bind or serve error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response
/// body. Domain errors delegate to their own response handling, while other
/// errors use standard mappings. Internal errors are logged with full details
/// but return generic messages to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For all other error types (DbErr, etc.)
/// - Variable - For domain errors, delegated to their `into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::CommentErr(err) => err.into_response(),
            Self::PostErr(err) => err.into_response(),
            Self::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto::new(StatusCode::NOT_FOUND.as_u16(), msg)),
            )
                .into_response(),
            Self::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new(StatusCode::BAD_REQUEST.as_u16(), msg)),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server
/// error" message to the client to avoid leaking implementation details. Used
/// as a fallback for errors that don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        internal_server_error()
    }
}

fn internal_server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorDto::new(
            StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            "Internal server error",
        )),
    )
        .into_response()
}
