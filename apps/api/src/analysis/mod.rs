// Resume Analysis Engine
// Implements: skill gap detection, TF-IDF contextual similarity, request orchestration.
// Both scorers are pure functions; only `analyze` touches the role catalog.

pub mod handlers;
pub mod similarity;
pub mod skills;
pub mod tfidf;
pub mod tokenizer;
pub mod upload;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{RoleCatalog, RoleProfile};
use crate::errors::AppError;
use similarity::similarity_score;
use skills::match_skills;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub resume_text: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub present_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// 0 – 100, two decimals
    pub skill_match_percentage: f64,
    /// 0 – 100, two decimals
    pub similarity_score: f64,
}

/// Rounds to two decimals. Exact binary ties go to the even digit (3.125 → 3.12).
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Resolves a role name, or fails with the full list of valid names.
pub fn resolve_role<'a>(catalog: &'a dyn RoleCatalog, role: &str) -> Result<&'a RoleProfile, AppError> {
    catalog.lookup(role).ok_or_else(|| AppError::InvalidRole {
        role: role.to_string(),
        available_roles: catalog.role_names(),
    })
}

/// Scores `resume_text` against a resolved role profile.
pub fn score_profile(resume_text: &str, profile: &RoleProfile) -> AnalysisResult {
    let skill_match = match_skills(resume_text, &profile.skills);
    let similarity = similarity_score(resume_text, &profile.description);

    AnalysisResult {
        present_skills: skill_match.present,
        missing_skills: skill_match.missing,
        skill_match_percentage: skill_match.percentage,
        similarity_score: similarity,
    }
}

/// Full pipeline: role lookup → skill match → similarity → merged result.
pub fn analyze(catalog: &dyn RoleCatalog, request: &AnalysisRequest) -> Result<AnalysisResult, AppError> {
    let profile = resolve_role(catalog, &request.role)?;
    let result = score_profile(&request.resume_text, profile);

    debug!(
        role = %request.role,
        present = result.present_skills.len(),
        missing = result.missing_skills.len(),
        skill_match_percentage = result.skill_match_percentage,
        similarity_score = result.similarity_score,
        "Resume analyzed"
    );

    Ok(result)
}
