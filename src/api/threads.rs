//! Thread and comment endpoints

use serde::Serialize;
use serde_json::json;

use super::client::TwistClient;
use super::error::ApiError;
use crate::models::{Comment, Thread, ThreadUpdate};

#[derive(Serialize)]
struct NewThread<'a> {
    channel_id: u64,
    title: &'a str,
    content: &'a str,
    #[serde(skip_serializing_if = "<[u64]>::is_empty")]
    recipients: &'a [u64],
}

#[derive(Serialize)]
struct NewComment<'a> {
    thread_id: u64,
    content: &'a str,
    #[serde(skip_serializing_if = "<[u64]>::is_empty")]
    recipients: &'a [u64],
}

#[derive(Serialize)]
struct ThreadChanges<'a> {
    id: u64,
    #[serde(flatten)]
    changes: &'a ThreadUpdate,
}

impl TwistClient {
    pub async fn get_threads(&self, channel_id: u64) -> Result<Vec<Thread>, ApiError> {
        self.get("/threads/get", &[("channel_id", channel_id.to_string())])
            .await
    }

    pub async fn get_thread(&self, id: u64) -> Result<Thread, ApiError> {
        self.get("/threads/getone", &[("id", id.to_string())]).await
    }

    /// Start a thread; `recipients` are user ids to notify.
    pub async fn create_thread(
        &self,
        channel_id: u64,
        title: &str,
        content: &str,
        recipients: &[u64],
    ) -> Result<Thread, ApiError> {
        let payload = NewThread {
            channel_id,
            title,
            content,
            recipients,
        };
        self.post("/threads/add", &payload).await
    }

    pub async fn update_thread(&self, id: u64, changes: &ThreadUpdate) -> Result<Thread, ApiError> {
        self.post("/threads/update", &ThreadChanges { id, changes })
            .await
    }

    pub async fn delete_thread(&self, id: u64) -> Result<(), ApiError> {
        self.thread_action("remove", id).await
    }

    pub async fn pin_thread(&self, id: u64) -> Result<(), ApiError> {
        self.thread_action("pin", id).await
    }

    pub async fn unpin_thread(&self, id: u64) -> Result<(), ApiError> {
        self.thread_action("unpin", id).await
    }

    pub async fn star_thread(&self, id: u64) -> Result<(), ApiError> {
        self.thread_action("star", id).await
    }

    pub async fn unstar_thread(&self, id: u64) -> Result<(), ApiError> {
        self.thread_action("unstar", id).await
    }

    pub async fn archive_thread(&self, id: u64) -> Result<(), ApiError> {
        self.thread_action("archive", id).await
    }

    pub async fn unarchive_thread(&self, id: u64) -> Result<(), ApiError> {
        self.thread_action("unarchive", id).await
    }

    async fn thread_action(&self, action: &str, id: u64) -> Result<(), ApiError> {
        self.post_action(&format!("/threads/{}", action), &json!({ "id": id }))
            .await
    }

    /// Comments of a thread, in the order the service returns them.
    pub async fn get_comments(&self, thread_id: u64) -> Result<Vec<Comment>, ApiError> {
        self.get("/comments/get", &[("thread_id", thread_id.to_string())])
            .await
    }

    /// Reply to a thread.
    pub async fn post_comment(
        &self,
        thread_id: u64,
        content: &str,
        recipients: &[u64],
    ) -> Result<Comment, ApiError> {
        let payload = NewComment {
            thread_id,
            content,
            recipients,
        };
        self.post("/comments/add", &payload).await
    }

    pub async fn update_comment(&self, id: u64, content: &str) -> Result<Comment, ApiError> {
        self.post("/comments/update", &json!({ "id": id, "content": content }))
            .await
    }

    pub async fn delete_comment(&self, id: u64) -> Result<(), ApiError> {
        self.post_action("/comments/remove", &json!({ "id": id }))
            .await
    }
}
