//! Workspace endpoint

use super::client::TwistClient;
use super::error::ApiError;
use crate::models::Workspace;

impl TwistClient {
    /// Workspaces the token's user belongs to.
    pub async fn get_workspaces(&self) -> Result<Vec<Workspace>, ApiError> {
        self.get("/workspaces/get", &[]).await
    }
}
