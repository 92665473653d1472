//! Direct message models

use serde::{Deserialize, Serialize};

/// Direct-message channel between a set of users
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conversation {
    pub id: u64,
    pub user_ids: Vec<u64>,
    pub message_count: u64,
    pub created_ts: i64,
    pub is_archived: bool,
    pub is_muted: bool,
}

/// A single message in a conversation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationMessage {
    pub id: u64,
    pub conversation_id: u64,
    pub content: String,
    pub user_id: u64,
    pub created_ts: i64,
}
