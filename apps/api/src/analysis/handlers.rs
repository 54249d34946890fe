//! Axum route handlers for the Analysis API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::analysis::models::AnalysisResponse;
use crate::analysis::normalizer::normalize;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub resume_text: Option<String>,
    pub job_description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub resume_text: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/analyze
///
/// Compares resume text against a job description. Both are required.
pub async fn handle_analyze(
    State(state): State<AppState>,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, AppError> {
    const REQUIRED: &str = "Resume text and job description are required";

    let Json(req) = body.map_err(|_| AppError::Validation(REQUIRED.to_string()))?;
    let (Some(resume_text), Some(job_description)) = (
        non_empty(req.resume_text),
        non_empty(req.job_description),
    ) else {
        return Err(AppError::Validation(REQUIRED.to_string()));
    };

    run_analysis(&state, resume_text, Some(job_description)).await
}

/// POST /api/analyze/resume
///
/// Generic software-engineering review of a resume with no job description.
pub async fn handle_review(
    State(state): State<AppState>,
    body: Result<Json<ReviewRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, AppError> {
    const REQUIRED: &str = "Resume text is required";

    let Json(req) = body.map_err(|_| AppError::Validation(REQUIRED.to_string()))?;
    let resume_text =
        non_empty(req.resume_text).ok_or_else(|| AppError::Validation(REQUIRED.to_string()))?;

    run_analysis(&state, resume_text, None).await
}

async fn run_analysis(
    state: &AppState,
    resume_text: String,
    job_description: Option<String>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let request_id = Uuid::new_v4();
    let mode = if job_description.is_some() { "match" } else { "review" };
    let span = info_span!("analysis", %request_id, mode);

    async move {
        info!(
            "Analyzing resume ({} chars, job description: {} chars)",
            resume_text.len(),
            job_description.as_deref().map_or(0, str::len)
        );

        let raw = state
            .analyzer
            .request_analysis(&resume_text, job_description.as_deref())
            .await?;
        let response = normalize(raw, &resume_text);

        info!("Analysis complete");
        Ok::<_, AppError>(Json(response))
    }
    .instrument(span)
    .await
}

/// Only a missing or zero-length field is rejected; whitespace is passed through.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
