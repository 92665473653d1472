//! Thread and comment models

use serde::{Deserialize, Serialize};

/// Root message of a comment tree, posted in a channel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thread {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub channel_id: u64,
    pub workspace_id: u64,
    pub creator: u64,
    pub posted_ts: i64,
    pub last_updated_ts: i64,
    pub comment_count: u64,
    pub starred: bool,
    pub pinned: bool,
    pub archived: bool,
    pub participants: Vec<u64>,
}

/// Reply inside a thread
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub id: u64,
    pub content: String,
    pub thread_id: u64,
    pub creator: u64,
    pub posted_ts: i64,
    pub last_updated_ts: i64,
}

/// Fields that `threads/update` may change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThreadUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl ThreadUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}
