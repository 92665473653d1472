//! `twist reactions`

use std::io::Write;

use anyhow::{Context, Result};
use clap::Subcommand;

use crate::api::{ReactionTarget, TwistClient};
use crate::output::Table;

#[derive(Subcommand, Debug)]
pub enum ReactionsCommand {
    /// Add an emoji reaction to a thread or comment
    Add {
        /// 'thread' or 'comment'
        target_type: String,
        target_id: u64,
        emoji: String,
    },
    /// Remove an emoji reaction from a thread or comment
    Remove {
        /// 'thread' or 'comment'
        target_type: String,
        target_id: u64,
        emoji: String,
    },
    /// List the reactions on a thread or comment
    List {
        /// 'thread' or 'comment'
        target_type: String,
        target_id: u64,
    },
}

pub async fn run<W: Write>(
    client: &TwistClient,
    command: ReactionsCommand,
    out: &mut W,
) -> Result<()> {
    match command {
        ReactionsCommand::Add {
            target_type,
            target_id,
            emoji,
        } => {
            let target: ReactionTarget = target_type.parse()?;
            let reaction = client
                .add_reaction(target, target_id, &emoji)
                .await
                .context("failed to add reaction")?;

            writeln!(out, "Reaction added successfully!")?;
            writeln!(out, "Reaction ID: {}", reaction.id)?;
            writeln!(out, "Emoji: {}", reaction.emoji)?;
        }
        ReactionsCommand::Remove {
            target_type,
            target_id,
            emoji,
        } => {
            let target: ReactionTarget = target_type.parse()?;
            client
                .remove_reaction(target, target_id, &emoji)
                .await
                .context("failed to remove reaction")?;
            writeln!(out, "Reaction removed successfully")?;
        }
        ReactionsCommand::List {
            target_type,
            target_id,
        } => {
            let target: ReactionTarget = target_type.parse()?;
            let reactions = client
                .get_reactions(target, target_id)
                .await
                .context("failed to get reactions")?;

            if reactions.is_empty() {
                writeln!(out, "No reactions found.")?;
                return Ok(());
            }

            let mut table = Table::new(["ID", "EMOJI", "USER ID"]);
            for r in &reactions {
                table.row([r.id.to_string(), r.emoji.clone(), r.user_id.to_string()]);
            }
            table.write_to(out)?;
        }
    }
    Ok(())
}
