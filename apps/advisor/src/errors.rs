use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::recommender::RecommenderError;

/// Message shown when the recommendation service cannot be reached.
pub const UNREACHABLE_MESSAGE: &str =
    "Sunucuya bağlanırken hata oluştu. Öneri servisi çalışıyor mu?";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Recommendation service error: {0}")]
    Recommender(String),

    #[error("Recommendation service unavailable: {0}")]
    RecommenderUnavailable(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<RecommenderError> for AppError {
    fn from(err: RecommenderError) -> Self {
        match err {
            RecommenderError::Http(e) => AppError::RecommenderUnavailable(e.to_string()),
            RecommenderError::Upstream { message, .. } | RecommenderError::Rejected(message) => {
                AppError::Recommender(message)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Recommender(msg) => {
                tracing::warn!("Recommendation service error: {msg}");
                (StatusCode::BAD_GATEWAY, "RECOMMENDER_ERROR", msg.clone())
            }
            AppError::RecommenderUnavailable(detail) => {
                tracing::error!("Recommendation service unreachable: {detail}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "RECOMMENDER_UNAVAILABLE",
                    UNREACHABLE_MESSAGE.to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = AppError::Validation("boş".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_rejected_upstream_maps_to_bad_gateway() {
        let err: AppError = RecommenderError::Rejected("model yüklenemedi".to_string()).into();
        assert!(matches!(&err, AppError::Recommender(m) if m == "model yüklenemedi"));
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_upstream_status_maps_to_bad_gateway() {
        let err: AppError = RecommenderError::Upstream {
            status: 500,
            message: "boom".to_string(),
        }
        .into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_internal_hides_details() {
        let response = AppError::Internal(anyhow::anyhow!("secret")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
