//! Reaction endpoints

use std::fmt;
use std::str::FromStr;

use serde_json::json;

use super::client::TwistClient;
use super::error::ApiError;
use crate::models::Reaction;

/// Object kinds a reaction can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionTarget {
    Thread,
    Comment,
}

impl ReactionTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            ReactionTarget::Thread => "thread",
            ReactionTarget::Comment => "comment",
        }
    }
}

impl fmt::Display for ReactionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionTarget {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "thread" => Ok(ReactionTarget::Thread),
            "comment" => Ok(ReactionTarget::Comment),
            other => Err(ApiError::Validation(format!(
                "invalid target type '{}': must be 'thread' or 'comment'",
                other
            ))),
        }
    }
}

impl TwistClient {
    pub async fn add_reaction(
        &self,
        target: ReactionTarget,
        object_id: u64,
        emoji: &str,
    ) -> Result<Reaction, ApiError> {
        let payload = json!({
            "object_type": target.as_str(),
            "object_id": object_id,
            "emoji": emoji,
        });
        self.post("/reactions/add", &payload).await
    }

    pub async fn remove_reaction(
        &self,
        target: ReactionTarget,
        object_id: u64,
        emoji: &str,
    ) -> Result<(), ApiError> {
        let payload = json!({
            "object_type": target.as_str(),
            "object_id": object_id,
            "emoji": emoji,
        });
        self.post_action("/reactions/remove", &payload).await
    }

    /// Reactions on one object; the query key names the object kind.
    pub async fn get_reactions(
        &self,
        target: ReactionTarget,
        object_id: u64,
    ) -> Result<Vec<Reaction>, ApiError> {
        self.get("/reactions/get", &[(target.as_str(), object_id.to_string())])
            .await
    }
}
