//! Attachment endpoints: listing, multipart upload and streamed download

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use reqwest::multipart::{Form, Part};
use tokio::io::AsyncWriteExt;

use super::client::TwistClient;
use super::error::ApiError;
use crate::models::Attachment;

/// Object kinds that can carry attachments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentTarget {
    Thread,
    Comment,
    Conversation,
}

impl AttachmentTarget {
    /// Request field naming the parent object.
    pub fn field(self) -> &'static str {
        match self {
            AttachmentTarget::Thread => "thread_id",
            AttachmentTarget::Comment => "comment_id",
            AttachmentTarget::Conversation => "conversation_id",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AttachmentTarget::Thread => "thread",
            AttachmentTarget::Comment => "comment",
            AttachmentTarget::Conversation => "conversation",
        }
    }
}

impl fmt::Display for AttachmentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttachmentTarget {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "thread" => Ok(AttachmentTarget::Thread),
            "comment" => Ok(AttachmentTarget::Comment),
            "conversation" => Ok(AttachmentTarget::Conversation),
            other => Err(ApiError::Validation(format!(
                "invalid target type '{}': must be 'thread', 'comment' or 'conversation'",
                other
            ))),
        }
    }
}

impl TwistClient {
    pub async fn get_attachments(
        &self,
        target: AttachmentTarget,
        object_id: u64,
    ) -> Result<Vec<Attachment>, ApiError> {
        self.get(
            "/attachments/get",
            &[(target.field(), object_id.to_string())],
        )
        .await
    }

    pub async fn get_attachment(&self, id: u64) -> Result<Attachment, ApiError> {
        self.get("/attachments/getone", &[("id", id.to_string())])
            .await
    }

    /// Upload a local file and attach it to a thread, comment or conversation.
    pub async fn upload_attachment(
        &self,
        target: AttachmentTarget,
        object_id: u64,
        path: &Path,
    ) -> Result<Attachment, ApiError> {
        let data = tokio::fs::read(path)
            .await
            .map_err(|e| ApiError::io("read", path, e))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        tracing::debug!("Uploading {} ({} bytes)", file_name, data.len());

        let form = Form::new()
            .part("file", Part::bytes(data).file_name(file_name))
            .text(target.field(), object_id.to_string());

        self.post_multipart("/attachments/upload", form).await
    }

    /// Download an attachment into `out`, returning the number of bytes written.
    ///
    /// The file URL is signed, so the second request goes out without the token.
    /// A partially written file is left in place if the transfer fails.
    pub async fn download_attachment(&self, id: u64, out: &Path) -> Result<u64, ApiError> {
        let attachment = self.get_attachment(id).await?;
        if attachment.url.is_empty() {
            return Err(ApiError::Validation(format!(
                "attachment {} has no download URL",
                id
            )));
        }

        let mut resp = self.fetch_unauthenticated(&attachment.url).await?;

        let mut file = tokio::fs::File::create(out)
            .await
            .map_err(|e| ApiError::io("create", out, e))?;

        let mut written = 0u64;
        while let Some(chunk) = resp.chunk().await.map_err(|source| ApiError::Connection {
            url: attachment.url.clone(),
            source,
        })? {
            file.write_all(&chunk)
                .await
                .map_err(|e| ApiError::io("write", out, e))?;
            written += chunk.len() as u64;
        }
        file.flush()
            .await
            .map_err(|e| ApiError::io("write", out, e))?;

        tracing::debug!("Wrote {} bytes to {}", written, out.display());
        Ok(written)
    }
}
