//! Direct message endpoints: conversations and their messages

use serde::Serialize;
use serde_json::json;

use super::client::TwistClient;
use super::error::ApiError;
use crate::models::{Conversation, ConversationMessage};

#[derive(Serialize)]
struct NewMessage<'a> {
    conversation_id: u64,
    content: &'a str,
    #[serde(skip_serializing_if = "<[u64]>::is_empty")]
    recipients: &'a [u64],
}

/// Outcome of sending a direct message: where it went and what was stored.
#[derive(Debug, Clone)]
pub struct DirectMessage {
    pub conversation: Conversation,
    pub message: ConversationMessage,
}

impl TwistClient {
    pub async fn get_conversations(&self) -> Result<Vec<Conversation>, ApiError> {
        self.get("/conversations/get", &[]).await
    }

    pub async fn get_conversation_messages(
        &self,
        conversation_id: u64,
    ) -> Result<Vec<ConversationMessage>, ApiError> {
        self.get(
            "/conversation_messages/get",
            &[("conversation_id", conversation_id.to_string())],
        )
        .await
    }

    /// Resolve the conversation between exactly these users, creating it if needed.
    pub async fn get_or_create_conversation(
        &self,
        user_ids: &[u64],
    ) -> Result<Conversation, ApiError> {
        self.post("/conversations/get_or_create", &json!({ "user_ids": user_ids }))
            .await
    }

    pub async fn send_conversation_message(
        &self,
        conversation_id: u64,
        content: &str,
        recipients: &[u64],
    ) -> Result<ConversationMessage, ApiError> {
        let payload = NewMessage {
            conversation_id,
            content,
            recipients,
        };
        self.post("/conversation_messages/add", &payload).await
    }

    /// Send a direct message to a set of users.
    ///
    /// Two sequential calls: resolve-or-create the conversation, then post.
    /// A conversation created by the first call stays if the post fails.
    pub async fn send_direct_message(
        &self,
        user_ids: &[u64],
        content: &str,
    ) -> Result<DirectMessage, ApiError> {
        if user_ids.is_empty() {
            return Err(ApiError::Validation(
                "a direct message needs at least one recipient".into(),
            ));
        }

        let conversation = self.get_or_create_conversation(user_ids).await?;
        tracing::debug!("Posting into conversation {}", conversation.id);
        let message = self
            .send_conversation_message(conversation.id, content, &[])
            .await?;

        Ok(DirectMessage {
            conversation,
            message,
        })
    }

    pub async fn archive_conversation(&self, id: u64) -> Result<(), ApiError> {
        self.conversation_action("archive", id).await
    }

    pub async fn unarchive_conversation(&self, id: u64) -> Result<(), ApiError> {
        self.conversation_action("unarchive", id).await
    }

    pub async fn mute_conversation(&self, id: u64) -> Result<(), ApiError> {
        self.conversation_action("mute", id).await
    }

    pub async fn unmute_conversation(&self, id: u64) -> Result<(), ApiError> {
        self.conversation_action("unmute", id).await
    }

    pub async fn mark_conversation_read(&self, id: u64) -> Result<(), ApiError> {
        self.conversation_action("mark_read", id).await
    }

    pub async fn mark_conversation_unread(&self, id: u64) -> Result<(), ApiError> {
        self.conversation_action("mark_unread", id).await
    }

    async fn conversation_action(&self, action: &str, id: u64) -> Result<(), ApiError> {
        self.post_action(&format!("/conversations/{}", action), &json!({ "id": id }))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockServer;

    #[tokio::test]
    async fn test_send_direct_message_two_calls_in_order() {
        let server = MockServer::start().await;
        server.respond_json(
            "POST",
            "/conversations/get_or_create",
            json!({"id": 7, "user_ids": [1, 55]}),
        ).await;
        server.respond_json(
            "POST",
            "/conversation_messages/add",
            json!({"id": 301, "conversation_id": 7, "content": "hi"}),
        ).await;

        let sent = server.client().send_direct_message(&[55], "hi").await.unwrap();
        assert_eq!(sent.conversation.id, 7);
        assert_eq!(sent.message.id, 301);

        let reqs = server.requests();
        assert_eq!(reqs.len(), 2);
        assert_eq!(reqs[0].path, "/conversations/get_or_create");
        assert_eq!(reqs[0].json(), json!({"user_ids": [55]}));
        assert_eq!(reqs[1].path, "/conversation_messages/add");
        assert_eq!(
            reqs[1].json(),
            json!({"conversation_id": 7, "content": "hi"})
        );
    }

    #[tokio::test]
    async fn test_send_direct_message_stops_after_failed_lookup() {
        let server = MockServer::start().await;
        server.respond(
            "POST",
            "/conversations/get_or_create",
            400,
            r#"{"error": [200, "Unknown user"]}"#,
        ).await;

        let err = server
            .client()
            .send_direct_message(&[55], "hi")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Api { ref code, .. } if code == "200"));
        assert_eq!(server.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_send_direct_message_requires_recipient() {
        let server = MockServer::start().await;
        let err = server
            .client()
            .send_direct_message(&[], "hi")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(server.requests().is_empty());
    }

    #[tokio::test]
    async fn test_conversation_actions() {
        let server = MockServer::start().await;
        for action in ["archive", "unarchive", "mute", "unmute", "mark_read", "mark_unread"] {
            server.respond_json("POST", &format!("/conversations/{}", action), json!({})).await;
        }

        let client = server.client();
        client.archive_conversation(4).await.unwrap();
        client.unarchive_conversation(4).await.unwrap();
        client.mute_conversation(4).await.unwrap();
        client.unmute_conversation(4).await.unwrap();
        client.mark_conversation_read(4).await.unwrap();
        client.mark_conversation_unread(4).await.unwrap();

        let reqs = server.requests();
        assert_eq!(reqs.len(), 6);
        assert_eq!(reqs[4].path, "/conversations/mark_read");
        assert!(reqs.iter().all(|r| r.json() == json!({"id": 4})));
    }

    #[tokio::test]
    async fn test_list_messages() {
        let server = MockServer::start().await;
        server.respond_json(
            "GET",
            "/conversation_messages/get",
            json!([{"id": 1, "conversation_id": 4, "user_id": 9, "content": "yo"}]),
        ).await;

        let messages = server.client().get_conversation_messages(4).await.unwrap();
        assert_eq!(messages[0].user_id, 9);
        assert_eq!(
            server.requests()[0].query_param("conversation_id").as_deref(),
            Some("4")
        );
    }
}
