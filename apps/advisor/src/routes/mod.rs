pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers as chat;
use crate::recommender::handlers as recommender;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Chat API
        .route("/api/v1/chat/classify", post(chat::handle_classify))
        .route("/api/v1/chat/quick-replies", get(chat::handle_quick_replies))
        .route("/api/v1/chat/rules", get(chat::handle_list_rules))
        .route(
            "/api/v1/chat/conversations",
            post(chat::handle_create_conversation),
        )
        .route(
            "/api/v1/chat/conversations/:id",
            get(chat::handle_get_conversation),
        )
        .route(
            "/api/v1/chat/conversations/:id/messages",
            post(chat::handle_post_message),
        )
        // Recommendation API
        .route("/api/v1/programs", get(recommender::handle_list_programs))
        .route(
            "/api/v1/recommendations",
            post(recommender::handle_recommend),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::chat::catalog::{Catalog, FALLBACKS, GREETING};
    use crate::chat::conversation::ConversationStore;
    use crate::chat::selector::SeededSelector;
    use crate::chat::Advisor;
    use crate::config::Config;
    use crate::recommender::{
        ProgramType, RecommendQuery, Recommendation, Recommender, RecommenderError,
    };

    /// Canned recommender that records the queries it receives.
    #[derive(Default)]
    struct StubRecommender {
        reply: Mutex<Option<Result<Vec<Recommendation>, String>>>,
        seen: Mutex<Vec<RecommendQuery>>,
    }

    impl StubRecommender {
        fn returning(recs: Vec<Recommendation>) -> Self {
            Self {
                reply: Mutex::new(Some(Ok(recs))),
                ..Default::default()
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                reply: Mutex::new(Some(Err(message.to_string()))),
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl Recommender for StubRecommender {
        async fn recommend(
            &self,
            query: &RecommendQuery,
        ) -> Result<Vec<Recommendation>, RecommenderError> {
            self.seen.lock().unwrap().push(query.clone());
            match self.reply.lock().unwrap().clone() {
                Some(Ok(recs)) => Ok(recs),
                Some(Err(message)) => Err(RecommenderError::Rejected(message)),
                None => Ok(vec![]),
            }
        }
    }

    fn test_config() -> Config {
        Config {
            recommender_url: "http://recommender.test".to_string(),
            recommender_timeout_secs: 1,
            chat_rules_path: None,
            chat_fallback_seed: Some(1),
            max_conversations: 100,
            port: 0,
            rust_log: "info".to_string(),
        }
    }

    fn test_state(recommender: Arc<StubRecommender>) -> AppState {
        let advisor = Advisor::from_catalog(
            Catalog::builtin().unwrap(),
            Arc::new(SeededSelector::new(1)),
        )
        .unwrap();
        AppState {
            config: test_config(),
            advisor: Arc::new(advisor),
            conversations: ConversationStore::with_capacity(100),
            recommender,
        }
    }

    fn app() -> Router {
        build_router(test_state(Arc::new(StubRecommender::default())))
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    fn sample_recommendation() -> Recommendation {
        Recommendation {
            rank: 1,
            department: "Bilgisayar Mühendisliği".to_string(),
            university: Some("ODTÜ".to_string()),
            city: Some("Ankara".to_string()),
            ranking: Some(3500),
            score: 0.93,
        }
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["conversations"], 0);
    }

    #[tokio::test]
    async fn test_classify_matches_rule() {
        let (status, body) = send(
            app(),
            "POST",
            "/api/v1/chat/classify",
            Some(json!({"text": "Selam, nasılsın?"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rule"], "greeting");
        assert!(body["response"].as_str().unwrap().starts_with("Merhaba!"));
    }

    #[tokio::test]
    async fn test_classify_fallback_omits_rule() {
        let (status, body) = send(
            app(),
            "POST",
            "/api/v1/chat/classify",
            Some(json!({"text": "xyz123"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.get("rule").is_none());
        let response = body["response"].as_str().unwrap();
        assert!(FALLBACKS.contains(&response));
    }

    #[tokio::test]
    async fn test_classify_rejects_blank_text() {
        let (status, body) = send(
            app(),
            "POST",
            "/api/v1/chat/classify",
            Some(json!({"text": "   "})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_quick_replies() {
        let (status, body) = send(app(), "GET", "/api/v1/chat/quick-replies", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["greeting"], GREETING);
        assert_eq!(body["quick_replies"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_rules_listed_in_priority_order() {
        let (status, body) = send(app(), "GET", "/api/v1/chat/rules", None).await;
        assert_eq!(status, StatusCode::OK);
        let rules = body.as_array().unwrap();
        assert_eq!(rules[0]["name"], "salary");
        assert_eq!(rules[1]["name"], "engineering_vs_medicine");
        assert_eq!(rules[1]["mode"], "all");
    }

    #[tokio::test]
    async fn test_conversation_round_trip() {
        let app = app();

        let (status, created) = send(app.clone(), "POST", "/api/v1/chat/conversations", None).await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created["id"].as_str().unwrap().to_string();
        assert_eq!(created["messages"][0]["text"], GREETING);

        let uri = format!("/api/v1/chat/conversations/{id}/messages");
        let (status, exchange) = send(
            app.clone(),
            "POST",
            &uri,
            Some(json!({"text": "Çok TEŞEKKÜR ederim"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(exchange["question"]["text"], "Çok TEŞEKKÜR ederim");
        assert_eq!(exchange["question"]["sender"], "user");
        assert_eq!(exchange["answer"]["sender"], "bot");
        assert_eq!(exchange["answer"]["rule"], "thanks");

        let (status, log) = send(
            app,
            "GET",
            &format!("/api/v1/chat/conversations/{id}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let messages = log["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1]["id"], 2);
        assert_eq!(messages[2]["id"], 3);
    }

    #[tokio::test]
    async fn test_unknown_conversation_is_404() {
        let uri = format!("/api/v1/chat/conversations/{}/messages", Uuid::new_v4());
        let (status, body) = send(app(), "POST", &uri, Some(json!({"text": "selam"}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_programs_listed() {
        let (status, body) = send(app(), "GET", "/api/v1/programs", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["id"], "2_yillik");
        assert_eq!(body[3]["id"], "Esit_Agirlik");
    }

    #[tokio::test]
    async fn test_recommendations_forwarded() {
        let stub = Arc::new(StubRecommender::returning(vec![sample_recommendation()]));
        let app = build_router(test_state(stub.clone()));

        let (status, body) = send(
            app,
            "POST",
            "/api/v1/recommendations",
            Some(json!({"keywords": "  matematik, bilgisayar ", "program_type": "Sayisal", "top_k": 3})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recommendations"][0]["department"], "Bilgisayar Mühendisliği");
        assert_eq!(body["recommendations"][0]["rank"], 1);
        assert!(body.get("message").is_none());

        let seen = stub.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].keywords, "matematik, bilgisayar");
        assert_eq!(seen[0].program_type, Some(ProgramType::Quantitative));
        assert_eq!(seen[0].top_k, 3);
    }

    #[tokio::test]
    async fn test_empty_recommendations_carry_hint() {
        let (status, body) = send(
            app(),
            "POST",
            "/api/v1/recommendations",
            Some(json!({"keywords": "xyz"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 0);
        assert!(body["message"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_blank_keywords_not_forwarded() {
        let stub = Arc::new(StubRecommender::default());
        let app = build_router(test_state(stub.clone()));
        let (status, body) = send(
            app,
            "POST",
            "/api/v1/recommendations",
            Some(json!({"keywords": "  "})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Lütfen ilgi alanlarınızı yazın!");
        assert!(stub.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_failure_is_bad_gateway() {
        let stub = Arc::new(StubRecommender::failing("Model yüklenemedi"));
        let app = build_router(test_state(stub));
        let (status, body) = send(
            app,
            "POST",
            "/api/v1/recommendations",
            Some(json!({"keywords": "sanat"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "RECOMMENDER_ERROR");
        assert_eq!(body["error"]["message"], "Model yüklenemedi");
    }
}
