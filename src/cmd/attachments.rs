//! `twist attachments`

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Subcommand;

use crate::api::{AttachmentTarget, TwistClient};
use crate::output::{self, Table};

#[derive(Subcommand, Debug)]
pub enum AttachmentsCommand {
    /// Upload a file to a thread, comment or conversation
    Upload {
        /// 'thread', 'comment' or 'conversation'
        target_type: String,
        target_id: u64,
        file_path: PathBuf,
    },
    /// Download an attachment to a local file
    Download {
        attachment_id: u64,
        output_path: PathBuf,
    },
    /// List the attachments on a thread, comment or conversation
    List {
        /// 'thread', 'comment' or 'conversation'
        target_type: String,
        target_id: u64,
    },
}

pub async fn run<W: Write>(
    client: &TwistClient,
    command: AttachmentsCommand,
    out: &mut W,
) -> Result<()> {
    match command {
        AttachmentsCommand::Upload {
            target_type,
            target_id,
            file_path,
        } => {
            let target: AttachmentTarget = target_type.parse()?;
            let attachment = client
                .upload_attachment(target, target_id, &file_path)
                .await
                .context("failed to upload attachment")?;

            writeln!(out, "Attachment uploaded successfully!")?;
            writeln!(out, "Attachment ID: {}", attachment.id)?;
            writeln!(out, "Title: {}", attachment.title)?;
            writeln!(out, "Size: {} bytes", attachment.size)?;
        }
        AttachmentsCommand::Download {
            attachment_id,
            output_path,
        } => {
            let written = client
                .download_attachment(attachment_id, &output_path)
                .await
                .context("failed to download attachment")?;

            tracing::debug!("Downloaded {} bytes", written);
            writeln!(
                out,
                "Attachment downloaded successfully to {}",
                output_path.display()
            )?;
        }
        AttachmentsCommand::List {
            target_type,
            target_id,
        } => {
            let target: AttachmentTarget = target_type.parse()?;
            let attachments = client
                .get_attachments(target, target_id)
                .await
                .context("failed to get attachments")?;

            if attachments.is_empty() {
                writeln!(out, "No attachments found.")?;
                return Ok(());
            }

            let mut table = Table::new(["ID", "TITLE", "SIZE", "TYPE"]);
            for a in &attachments {
                table.row([
                    a.id.to_string(),
                    a.title.clone(),
                    output::human_size(a.size),
                    a.mime_type.clone(),
                ]);
            }
            table.write_to(out)?;
        }
    }
    Ok(())
}
