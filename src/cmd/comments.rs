//! `twist comments`

use std::io::Write;

use anyhow::{Context, Result};
use clap::Subcommand;

use super::join_words;
use crate::api::TwistClient;

#[derive(Subcommand, Debug)]
pub enum CommentsCommand {
    /// Update the content of a comment
    Update {
        comment_id: u64,
        #[arg(required = true, num_args = 1..)]
        content: Vec<String>,
    },
    /// Delete a comment
    Delete { comment_id: u64 },
}

pub async fn run<W: Write>(client: &TwistClient, command: CommentsCommand, out: &mut W) -> Result<()> {
    match command {
        CommentsCommand::Update {
            comment_id,
            content,
        } => {
            let comment = client
                .update_comment(comment_id, &join_words(&content))
                .await
                .context("failed to update comment")?;

            writeln!(out, "Comment updated successfully!")?;
            writeln!(out, "Comment ID: {}", comment.id)?;
        }
        CommentsCommand::Delete { comment_id } => {
            client
                .delete_comment(comment_id)
                .await
                .context("failed to delete comment")?;
            writeln!(out, "Comment {} deleted successfully", comment_id)?;
        }
    }
    Ok(())
}
