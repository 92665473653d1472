//! Channel endpoints

use serde::Serialize;
use serde_json::json;

use super::client::TwistClient;
use super::error::ApiError;
use crate::models::{Channel, ChannelOptions, ChannelUpdate};

#[derive(Serialize)]
struct NewChannel<'a> {
    workspace_id: u64,
    name: &'a str,
    #[serde(flatten)]
    options: &'a ChannelOptions,
}

#[derive(Serialize)]
struct ChannelChanges<'a> {
    id: u64,
    #[serde(flatten)]
    changes: &'a ChannelUpdate,
}

impl TwistClient {
    /// Channels of a workspace. `archived` asks for archived channels only.
    pub async fn get_channels(
        &self,
        workspace_id: u64,
        archived: bool,
    ) -> Result<Vec<Channel>, ApiError> {
        let mut query = vec![("workspace_id", workspace_id.to_string())];
        if archived {
            query.push(("archived", "true".to_string()));
        }
        self.get("/channels/get", &query).await
    }

    pub async fn get_channel(&self, id: u64) -> Result<Channel, ApiError> {
        self.get("/channels/getone", &[("id", id.to_string())]).await
    }

    pub async fn create_channel(
        &self,
        workspace_id: u64,
        name: &str,
        options: &ChannelOptions,
    ) -> Result<Channel, ApiError> {
        let payload = NewChannel {
            workspace_id,
            name,
            options,
        };
        self.post("/channels/add", &payload).await
    }

    pub async fn update_channel(
        &self,
        id: u64,
        changes: &ChannelUpdate,
    ) -> Result<Channel, ApiError> {
        self.post("/channels/update", &ChannelChanges { id, changes })
            .await
    }

    /// Archive a channel. The request is the same whatever its current state.
    pub async fn archive_channel(&self, id: u64) -> Result<(), ApiError> {
        self.post_action("/channels/archive", &json!({ "id": id }))
            .await
    }

    pub async fn unarchive_channel(&self, id: u64) -> Result<(), ApiError> {
        self.post_action("/channels/unarchive", &json!({ "id": id }))
            .await
    }

    /// Delete a channel; the service only accepts archived channels.
    pub async fn delete_channel(&self, id: u64) -> Result<(), ApiError> {
        self.post_action("/channels/remove", &json!({ "id": id }))
            .await
    }

    pub async fn add_channel_user(&self, channel_id: u64, user_id: u64) -> Result<(), ApiError> {
        self.post_action(
            "/channels/add_user",
            &json!({ "id": channel_id, "user_id": user_id }),
        )
        .await
    }

    pub async fn remove_channel_user(
        &self,
        channel_id: u64,
        user_id: u64,
    ) -> Result<(), ApiError> {
        self.post_action(
            "/channels/remove_user",
            &json!({ "id": channel_id, "user_id": user_id }),
        )
        .await
    }
}
