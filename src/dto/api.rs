use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error response body returned by every failing endpoint.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ErrorDto {
    /// HTTP status code of the error.
    pub code: u16,
    /// Human-readable description of the error.
    pub message: String,
    /// Optional additional detail about the failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorDto {
    /// Creates an error body with no detail string.
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Attaches a detail string to the error body.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
