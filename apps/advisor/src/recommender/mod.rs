//! Recommender client — the only path to the external program-recommendation
//! service. The service is opaque: we validate, forward and relay its ranked
//! list, nothing more.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod handlers;

const PREDICT_PATH: &str = "/predict";
const MAX_ATTEMPTS: u32 = 3;
const BACKOFF_BASE_MS: u64 = 250;

pub const DEFAULT_TOP_K: u32 = 6;
pub const MAX_TOP_K: u32 = 20;

/// Shown when the service reports failure without a message.
pub const GENERIC_FAILURE: &str = "Bir hata oluştu";

#[derive(Debug, Error)]
pub enum RecommenderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Recommendation service error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Recommendation service reported failure: {0}")]
    Rejected(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Domain types
// ────────────────────────────────────────────────────────────────────────────

/// Dataset selector understood by the recommendation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgramType {
    #[serde(rename = "2_yillik")]
    Associate,
    #[serde(rename = "Sayisal")]
    Quantitative,
    #[serde(rename = "Sozel")]
    Verbal,
    #[serde(rename = "Esit_Agirlik")]
    EqualWeight,
}

impl ProgramType {
    pub const ALL: [ProgramType; 4] = [
        ProgramType::Associate,
        ProgramType::Quantitative,
        ProgramType::Verbal,
        ProgramType::EqualWeight,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProgramType::Associate => "2 Yıllık",
            ProgramType::Quantitative => "Sayısal",
            ProgramType::Verbal => "Sözel",
            ProgramType::EqualWeight => "Eşit Ağırlık",
        }
    }
}

/// A validated request, ready to forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendQuery {
    pub keywords: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_type: Option<ProgramType>,
    pub top_k: u32,
}

/// One suggested program, in the order the service ranked it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// 1-based position in the returned list.
    pub rank: usize,
    pub department: String,
    pub university: Option<String>,
    pub city: Option<String>,
    /// Entry ranking figure published for the program, when the service has it.
    pub ranking: Option<u32>,
    /// Similarity in `[0, 1]`.
    pub score: f64,
}

/// Implement this to swap the recommendation backend without touching handlers.
///
/// Carried in `AppState` as `Arc<dyn Recommender>`.
#[async_trait]
pub trait Recommender: Send + Sync {
    async fn recommend(&self, query: &RecommendQuery)
        -> Result<Vec<Recommendation>, RecommenderError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire format
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct PredictResponse {
    success: bool,
    #[serde(default)]
    recommendations: Vec<WireRecommendation>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireRecommendation {
    department: String,
    #[serde(default)]
    university: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    ranking: Option<u32>,
    score: f64,
}

/// Turns the service's envelope into ranked records, clamping stray scores.
fn into_recommendations(response: PredictResponse) -> Result<Vec<Recommendation>, RecommenderError> {
    if !response.success {
        let message = response
            .error
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE.to_string());
        return Err(RecommenderError::Rejected(message));
    }

    Ok(response
        .recommendations
        .into_iter()
        .enumerate()
        .map(|(i, r)| {
            let score = if r.score.is_nan() {
                warn!(department = %r.department, "Recommendation score is NaN, using 0");
                0.0
            } else if !(0.0..=1.0).contains(&r.score) {
                warn!(
                    department = %r.department,
                    score = r.score,
                    "Recommendation score outside [0, 1], clamping"
                );
                r.score.clamp(0.0, 1.0)
            } else {
                r.score
            };
            Recommendation {
                rank: i + 1,
                department: r.department,
                university: r.university,
                city: r.city,
                ranking: r.ranking,
                score,
            }
        })
        .collect())
}

// ────────────────────────────────────────────────────────────────────────────
// HTTP client
// ────────────────────────────────────────────────────────────────────────────

/// HTTP client for the recommendation service.
/// Retries transport failures and 5xx responses with exponential backoff.
#[derive(Clone)]
pub struct RecommenderClient {
    client: Client,
    predict_url: String,
}

impl RecommenderClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RecommenderError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            predict_url: format!("{}{}", base_url.trim_end_matches('/'), PREDICT_PATH),
        })
    }

    pub fn predict_url(&self) -> &str {
        &self.predict_url
    }
}

#[async_trait]
impl Recommender for RecommenderClient {
    async fn recommend(
        &self,
        query: &RecommendQuery,
    ) -> Result<Vec<Recommendation>, RecommenderError> {
        let mut last_error: Option<RecommenderError> = None;

        for attempt in 0..MAX_ATTEMPTS {
            if attempt > 0 {
                // Exponential backoff: 250ms, 500ms
                let delay = Duration::from_millis(BACKOFF_BASE_MS * (1 << (attempt - 1)));
                warn!(
                    "Recommendation call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self.client.post(&self.predict_url).json(query).send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(RecommenderError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Recommendation service returned {}: {}", status, body);
                last_error = Some(RecommenderError::Upstream {
                    status: status.as_u16(),
                    message: upstream_message(&body),
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(RecommenderError::Upstream {
                    status: status.as_u16(),
                    message: upstream_message(&body),
                });
            }

            // Decode failures are upstream errors, not transport ones.
            let body = response.text().await?;
            let envelope: PredictResponse = serde_json::from_str(&body).map_err(|e| {
                warn!("Recommendation service returned an unreadable body: {e}");
                RecommenderError::Upstream {
                    status: status.as_u16(),
                    message: format!("invalid response body: {e}"),
                }
            })?;
            debug!(
                count = envelope.recommendations.len(),
                success = envelope.success,
                "Recommendation call completed"
            );
            return into_recommendations(envelope);
        }

        Err(last_error.unwrap_or(RecommenderError::Upstream {
            status: 503,
            message: GENERIC_FAILURE.to_string(),
        }))
    }
}

/// Prefers the `error` field of a JSON envelope; falls back to the raw body.
fn upstream_message(body: &str) -> String {
    serde_json::from_str::<PredictResponse>(body)
        .ok()
        .and_then(|r| r.error)
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                GENERIC_FAILURE.to_string()
            } else {
                body.to_string()
            }
        })
}
