//! Attachment model

use serde::{Deserialize, Serialize};

/// File attached to a thread, comment or conversation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attachment {
    pub id: u64,
    pub title: String,
    /// Signed download URL; fetching it needs no bearer token
    pub url: String,
    pub size: u64,
    pub mime_type: String,
    pub uploaded_ts: i64,
}
