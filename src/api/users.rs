//! Workspace member endpoint

use super::client::TwistClient;
use super::error::ApiError;
use crate::models::User;

impl TwistClient {
    pub async fn get_workspace_users(&self, workspace_id: u64) -> Result<Vec<User>, ApiError> {
        self.get("/workspace_users/get", &[("id", workspace_id.to_string())])
            .await
    }
}
