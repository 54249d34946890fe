//! Axum route handler for resume upload.

use axum::extract::{multipart::MultipartRejection, Multipart};
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::pdf::extract_text;

const RESUME_FIELD: &str = "resume";
const PDF_MIME: &str = "application/pdf";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub text: String,
}

/// POST /api/upload
///
/// Accepts a multipart form with a single PDF in the `resume` field and returns its text.
/// Anything that is not `application/pdf` is refused before the parser sees it.
pub async fn handle_upload(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, AppError> {
    let mut multipart = multipart.map_err(|e| AppError::Validation(e.body_text()))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.body_text()))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }

        if field.content_type() != Some(PDF_MIME) {
            return Err(AppError::Validation(
                "Only PDF files are allowed!".to_string(),
            ));
        }

        let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        info!("Received upload '{}' ({} bytes)", file_name, bytes.len());

        let text = extract_text(bytes).await?;
        info!("Extracted {} chars from '{}'", text.len(), file_name);
        return Ok(Json(UploadResponse { text }));
    }

    Err(AppError::Validation("No file uploaded".to_string()))
}
