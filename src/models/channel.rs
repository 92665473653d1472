//! Channel models

use serde::{Deserialize, Serialize};

/// A named topic stream inside a workspace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Channel {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub workspace_id: u64,
    pub public: bool,
    pub archived: bool,
    pub color: u8,
    pub icon: u8,
    pub created_ts: i64,
}

/// Optional fields accepted by `channels/add`.
///
/// Only fields that are `Some` end up in the request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Color index, 0-11
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u8>,
    /// Icon index, 1-255
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ids: Option<Vec<u64>>,
}

/// Fields that `channels/update` may change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
}

impl ChannelUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.color.is_none()
            && self.public.is_none()
    }
}
