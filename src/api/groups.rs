//! Group endpoints

use serde::Serialize;
use serde_json::json;

use super::client::TwistClient;
use super::error::ApiError;
use crate::models::{Group, GroupOptions, GroupUpdate};

#[derive(Serialize)]
struct NewGroup<'a> {
    workspace_id: u64,
    name: &'a str,
    #[serde(flatten)]
    options: &'a GroupOptions,
}

#[derive(Serialize)]
struct GroupChanges<'a> {
    id: u64,
    #[serde(flatten)]
    changes: &'a GroupUpdate,
}

impl TwistClient {
    pub async fn get_groups(&self, workspace_id: u64) -> Result<Vec<Group>, ApiError> {
        self.get("/groups/get", &[("workspace_id", workspace_id.to_string())])
            .await
    }

    pub async fn get_group(&self, id: u64) -> Result<Group, ApiError> {
        self.get("/groups/getone", &[("id", id.to_string())]).await
    }

    pub async fn create_group(
        &self,
        workspace_id: u64,
        name: &str,
        options: &GroupOptions,
    ) -> Result<Group, ApiError> {
        let payload = NewGroup {
            workspace_id,
            name,
            options,
        };
        self.post("/groups/add", &payload).await
    }

    pub async fn update_group(&self, id: u64, changes: &GroupUpdate) -> Result<Group, ApiError> {
        self.post("/groups/update", &GroupChanges { id, changes })
            .await
    }

    pub async fn delete_group(&self, id: u64) -> Result<(), ApiError> {
        self.post_action("/groups/remove", &json!({ "id": id }))
            .await
    }

    pub async fn add_group_user(&self, group_id: u64, user_id: u64) -> Result<(), ApiError> {
        self.post_action(
            "/groups/add_user",
            &json!({ "id": group_id, "user_id": user_id }),
        )
        .await
    }

    pub async fn remove_group_user(&self, group_id: u64, user_id: u64) -> Result<(), ApiError> {
        self.post_action(
            "/groups/remove_user",
            &json!({ "id": group_id, "user_id": user_id }),
        )
        .await
    }
}
