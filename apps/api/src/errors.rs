use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::pdf::ExtractionError;
use crate::llm_client::LlmError;

const ANALYSIS_FAILED: &str = "Failed to analyze resume. Please try again.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as `{"error": "<message>"}`; internals stay in the logs.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Malformed model response: {0}")]
    MalformedModelResponse(String),

    #[error("Completion service error: {0}")]
    Upstream(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::MalformedModelResponse(_) | AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Validation(msg) => {
                tracing::warn!("Rejected request: {msg}");
                msg.clone()
            }
            AppError::Extraction(e) => {
                tracing::error!("PDF extraction failed: {e}");
                "Failed to process file".to_string()
            }
            AppError::MalformedModelResponse(msg) => {
                tracing::error!("Model response could not be parsed: {msg}");
                ANALYSIS_FAILED.to_string()
            }
            AppError::Upstream(e) => {
                tracing::error!("Completion service error: {e}");
                ANALYSIS_FAILED.to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
        };

        (self.status(), Json(json!({ "error": message }))).into_response()
    }
}
