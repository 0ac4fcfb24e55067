//! HTTP request handlers.
//!
//! Controllers are the transport boundary: they authenticate the request via
//! the auth guard, convert DTOs to operation parameters, call the service
//! layer, and convert domain models back to DTOs. Every handler carries a
//! `#[utoipa::path]` annotation feeding the generated OpenAPI document.

pub mod auth;
pub mod comment;
pub mod health;
pub mod post;
pub mod user;

use serde::Deserialize;

/// Query parameters for paginated listings.
#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}
