//! Axum route handlers for the Recommendation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::recommender::{
    ProgramType, RecommendQuery, Recommendation, DEFAULT_TOP_K, MAX_TOP_K,
};
use crate::state::AppState;

/// Shown alongside an empty result list.
pub const NO_RESULTS_HINT: &str =
    "Bu anahtar kelimeler için öneri bulunamadı. Farklı kelimeler deneyin!";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub keywords: String,
    #[serde(default)]
    pub program_type: Option<ProgramType>,
    #[serde(default)]
    pub top_k: Option<u32>,
}

impl RecommendRequest {
    pub fn validate(self) -> Result<RecommendQuery, AppError> {
        let keywords = self.keywords.trim();
        if keywords.is_empty() {
            return Err(AppError::Validation(
                "Lütfen ilgi alanlarınızı yazın!".to_string(),
            ));
        }

        let top_k = self.top_k.unwrap_or(DEFAULT_TOP_K);
        if !(1..=MAX_TOP_K).contains(&top_k) {
            return Err(AppError::Validation(format!(
                "top_k must be between 1 and {MAX_TOP_K}"
            )));
        }

        Ok(RecommendQuery {
            keywords: keywords.to_string(),
            program_type: self.program_type,
            top_k,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProgramTypeInfo {
    pub id: ProgramType,
    pub label: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/recommendations
///
/// Validates the interest text and relays the service's ranked program list.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    let query = request.validate()?;

    let recommendations = state.recommender.recommend(&query).await?;
    info!(
        count = recommendations.len(),
        top_k = query.top_k,
        "Recommendations served"
    );

    let message = recommendations
        .is_empty()
        .then(|| NO_RESULTS_HINT.to_string());

    Ok(Json(RecommendResponse {
        recommendations,
        message,
    }))
}

/// GET /api/v1/programs
pub async fn handle_list_programs() -> Json<Vec<ProgramTypeInfo>> {
    Json(
        ProgramType::ALL
            .iter()
            .map(|&p| ProgramTypeInfo {
                id: p,
                label: p.label(),
            })
            .collect(),
    )
}
