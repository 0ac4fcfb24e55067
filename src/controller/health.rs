use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Health check response body.
#[derive(Serialize, ToSchema)]
pub struct HealthDto {
    pub status: &'static str,
    pub version: &'static str,
}

/// Check API health.
///
/// # Returns
/// - `200 OK` - Service status and version
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service status", body = HealthDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}
