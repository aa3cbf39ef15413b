use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant surfaces to the caller the same way: HTTP 500 with
/// `{"success": false, "error": "<message>"}`. The variant only matters for logs.
#[derive(Debug, Error)]
pub enum AppError {
    /// The extraction call could not produce schema-conforming interview details.
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// The question generation call failed (network, auth, quota, empty output).
    #[error("Generation error: {0}")]
    Generation(String),

    /// The generated questions were not a JSON array of strings.
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Persistence error: {0}")]
    Persistence(#[from] sqlx::Error),

    /// A legacy-path field was missing or could not be rendered.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl AppError {
    fn code(&self) -> &'static str {
        match self {
            AppError::Extraction(_) => "EXTRACTION_ERROR",
            AppError::Generation(_) => "GENERATION_ERROR",
            AppError::Parse(_) => "PARSE_ERROR",
            AppError::Persistence(_) => "PERSISTENCE_ERROR",
            AppError::InvalidRequest(_) => "INVALID_REQUEST",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(code = self.code(), "Interview generation failed: {self}");

        let body = Json(json!({
            "success": false,
            "error": self.to_string(),
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
