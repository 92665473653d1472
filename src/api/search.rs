//! Search endpoints
//!
//! Results come back in the order the service ranks them.

use super::client::TwistClient;
use super::error::ApiError;
use crate::models::{Comment, ConversationMessage, Thread};

impl TwistClient {
    pub async fn search_threads(
        &self,
        workspace_id: u64,
        query: &str,
        channel_id: Option<u64>,
        limit: Option<u32>,
    ) -> Result<Vec<Thread>, ApiError> {
        let mut params = vec![
            ("workspace_id", workspace_id.to_string()),
            ("query", query.to_string()),
        ];
        if let Some(channel_id) = channel_id {
            params.push(("channel_id", channel_id.to_string()));
        }
        if let Some(limit) = limit {
            params.push(("limit", limit.to_string()));
        }
        self.get("/threads/search", &params).await
    }

    pub async fn search_comments(
        &self,
        workspace_id: u64,
        query: &str,
        limit: Option<u32>,
    ) -> Result<Vec<Comment>, ApiError> {
        let mut params = vec![
            ("workspace_id", workspace_id.to_string()),
            ("query", query.to_string()),
        ];
        if let Some(limit) = limit {
            params.push(("limit", limit.to_string()));
        }
        self.get("/comments/search", &params).await
    }

    pub async fn search_conversation_messages(
        &self,
        query: &str,
        limit: Option<u32>,
    ) -> Result<Vec<ConversationMessage>, ApiError> {
        let mut params = vec![("query", query.to_string())];
        if let Some(limit) = limit {
            params.push(("limit", limit.to_string()));
        }
        self.get("/conversation_messages/search", &params).await
    }
}
