//! Workspace member model

use serde::{Deserialize, Serialize};

/// A member of a workspace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub user_type: String,
    pub bot: bool,
    pub removed: bool,
}
