//! Conversation log — the append-only message history of one chat session.
//!
//! The classifier never sees this; handlers own the log and record each
//! question/answer pair in submission order.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, RwLock};
use tracing::debug;
use uuid::Uuid;

/// Default cap on live conversations.
pub const DEFAULT_MAX_CONVERSATIONS: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Position in the conversation, starting at 1.
    pub id: u64,
    pub sender: Sender,
    /// Original text as submitted, never normalized.
    pub text: String,
    pub timestamp: DateTime<Utc>,
    /// Name of the rule that produced a bot reply; `None` for fallbacks and users.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Conversation {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    messages: Vec<ChatMessage>,
}

impl Conversation {
    /// Starts a conversation whose first message is the bot greeting.
    pub fn new(greeting: &str) -> Self {
        let mut conversation = Conversation {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            messages: Vec::new(),
        };
        conversation.push(Sender::Bot, greeting.to_string(), None);
        conversation
    }

    /// Appends a message and returns a copy of it.
    pub fn push(&mut self, sender: Sender, text: String, rule: Option<String>) -> ChatMessage {
        let message = ChatMessage {
            id: self.messages.len() as u64 + 1,
            sender,
            text,
            timestamp: Utc::now(),
            rule,
        };
        self.messages.push(message.clone());
        message
    }

    #[cfg(test)]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory store
// ────────────────────────────────────────────────────────────────────────────

/// Process-local conversation store. Each conversation sits behind its own
/// mutex so one session's exchanges are serialized while others proceed.
///
/// Holds at most `capacity` conversations; creating one more evicts the
/// oldest.
#[derive(Clone)]
pub struct ConversationStore {
    inner: Arc<RwLock<Slots>>,
    capacity: usize,
}

#[derive(Default)]
struct Slots {
    by_id: HashMap<Uuid, Arc<Mutex<Conversation>>>,
    /// Ids in creation order, oldest first.
    order: VecDeque<Uuid>,
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_CONVERSATIONS)
    }
}

impl ConversationStore {
    /// A capacity of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Slots::default())),
            capacity: capacity.max(1),
        }
    }

    /// Creates a conversation seeded with `greeting` and returns a snapshot.
    pub async fn create(&self, greeting: &str) -> Conversation {
        let conversation = Conversation::new(greeting);
        let snapshot = conversation.clone();

        let mut slots = self.inner.write().await;
        while slots.by_id.len() >= self.capacity {
            let Some(oldest) = slots.order.pop_front() else {
                break;
            };
            slots.by_id.remove(&oldest);
            debug!(conversation_id = %oldest, "Conversation evicted");
        }
        slots.order.push_back(conversation.id);
        slots
            .by_id
            .insert(conversation.id, Arc::new(Mutex::new(conversation)));

        snapshot
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<Mutex<Conversation>>> {
        self.inner.read().await.by_id.get(&id).cloned()
    }

    pub async fn snapshot(&self, id: Uuid) -> Option<Conversation> {
        let conversation = self.get(id).await?;
        let guard = conversation.lock().await;
        Some(guard.clone())
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.by_id.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
