//! Axum route handlers for the Chat API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chat::classifier::MatchMode;
use crate::chat::conversation::{ChatMessage, Conversation};
use crate::errors::AppError;
use crate::state::AppState;

/// Longest message the widget accepts, in characters.
pub const MAX_MESSAGE_CHARS: usize = 500;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub response: String,
    /// Matched rule name; absent when a fallback answered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExchangeResponse {
    pub question: ChatMessage,
    pub answer: ChatMessage,
}

#[derive(Debug, Serialize)]
pub struct QuickRepliesResponse {
    pub greeting: String,
    pub quick_replies: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RuleSummary {
    pub name: String,
    pub mode: MatchMode,
    pub triggers: Vec<String>,
}

fn validate_message(text: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }
    if text.chars().count() > MAX_MESSAGE_CHARS {
        return Err(AppError::Validation(format!(
            "text cannot exceed {MAX_MESSAGE_CHARS} characters"
        )));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/chat/classify
///
/// Stateless lookup: answers a single question without recording it.
pub async fn handle_classify(
    State(state): State<AppState>,
    Json(request): Json<MessageRequest>,
) -> Result<Json<ClassifyResponse>, AppError> {
    validate_message(&request.text)?;

    let decision = state.advisor.classifier.classify_with_decision(&request.text);
    Ok(Json(ClassifyResponse {
        rule: decision.source.rule_name().map(str::to_string),
        response: decision.response.into_owned(),
    }))
}

/// GET /api/v1/chat/quick-replies
pub async fn handle_quick_replies(State(state): State<AppState>) -> Json<QuickRepliesResponse> {
    Json(QuickRepliesResponse {
        greeting: state.advisor.greeting.clone(),
        quick_replies: state.advisor.quick_replies.clone(),
    })
}

/// GET /api/v1/chat/rules
///
/// Rule table in priority order, without response bodies.
pub async fn handle_list_rules(State(state): State<AppState>) -> Json<Vec<RuleSummary>> {
    Json(
        state
            .advisor
            .classifier
            .rules()
            .iter()
            .map(|r| RuleSummary {
                name: r.name().to_string(),
                mode: r.mode(),
                triggers: r.triggers().to_vec(),
            })
            .collect(),
    )
}

/// POST /api/v1/chat/conversations
///
/// Opens a conversation whose log starts with the greeting.
pub async fn handle_create_conversation(
    State(state): State<AppState>,
) -> (StatusCode, Json<Conversation>) {
    let conversation = state.conversations.create(&state.advisor.greeting).await;
    tracing::debug!(conversation_id = %conversation.id, "Conversation created");
    (StatusCode::CREATED, Json(conversation))
}

/// GET /api/v1/chat/conversations/:id
pub async fn handle_get_conversation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Conversation>, AppError> {
    state
        .conversations
        .snapshot(id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Conversation {id} not found")))
}

/// POST /api/v1/chat/conversations/:id/messages
///
/// Appends the question and the classifier's answer. The conversation stays
/// locked for the whole exchange, so answers come back in submission order.
pub async fn handle_post_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<MessageRequest>,
) -> Result<Json<ExchangeResponse>, AppError> {
    validate_message(&request.text)?;

    let conversation = state
        .conversations
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Conversation {id} not found")))?;
    let mut conversation = conversation.lock().await;

    let (question, answer) = state.advisor.reply(&mut conversation, &request.text);

    Ok(Json(ExchangeResponse { question, answer }))
}
