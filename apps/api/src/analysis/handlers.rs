//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;

use crate::analysis::upload::{extract_pdf_text_blocking, read_upload};
use crate::analysis::{analyze, resolve_role, score_profile, AnalysisRequest, AnalysisResult};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RoleListResponse {
    pub roles: Vec<String>,
}

/// GET /api/v1/roles
///
/// Role names accepted by the analysis endpoints, in catalog order.
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<RoleListResponse> {
    Json(RoleListResponse {
        roles: state.catalog.role_names(),
    })
}

/// POST /api/v1/analyze
///
/// Scores raw resume text against one role: skill gaps plus contextual similarity.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    let result = analyze(state.catalog.as_ref(), &request)?;
    Ok(Json(result))
}

/// POST /api/v1/analyze/upload
///
/// Multipart variant: `file` is a PDF resume, `role` the target role name.
/// The role is checked before the PDF is parsed.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    let upload = read_upload(multipart).await?;
    let profile = resolve_role(state.catalog.as_ref(), &upload.role)?;

    let resume_text = extract_pdf_text_blocking(upload.file).await?;
    tracing::debug!(
        role = %upload.role,
        chars = resume_text.chars().count(),
        "Extracted resume text from PDF"
    );

    Ok(Json(score_profile(&resume_text, profile)))
}
