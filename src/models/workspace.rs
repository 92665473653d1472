//! Workspace model

use serde::{Deserialize, Serialize};

/// Top-level organization container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Workspace {
    pub id: u64,
    pub name: String,
    pub creator: u64,
    pub created_ts: i64,
    pub plan: String,
}
