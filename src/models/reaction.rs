//! Reaction model

use serde::{Deserialize, Serialize};

/// Emoji annotation left by one user on a thread or comment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reaction {
    pub id: u64,
    pub emoji: String,
    pub user_id: u64,
    pub object_id: u64,
}
