use std::sync::Arc;

use crate::chat::conversation::ConversationStore;
use crate::chat::Advisor;
use crate::config::Config;
use crate::recommender::Recommender;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Classifier, greeting and quick replies. Read-only after startup.
    pub advisor: Arc<Advisor>,
    pub conversations: ConversationStore,
    /// Pluggable recommendation backend. Default: `RecommenderClient` over HTTP.
    pub recommender: Arc<dyn Recommender>,
}
