//! `twist channels`

use std::io::Write;

use anyhow::{bail, Context, Result};
use clap::Subcommand;

use crate::api::TwistClient;
use crate::models::{ChannelOptions, ChannelUpdate};
use crate::output::Table;

#[derive(Subcommand, Debug)]
pub enum ChannelsCommand {
    /// List all channels in a workspace
    List {
        workspace_id: u64,
        /// Show only archived channels
        #[arg(long)]
        archived: bool,
    },
    /// Show channel details
    Show { channel_id: u64 },
    /// Create a new channel
    Create {
        workspace_id: u64,
        name: String,
        #[arg(long)]
        description: Option<String>,
        /// Channel color (0-11)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=11))]
        color: Option<u8>,
        /// Channel icon (1-255)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=255))]
        icon: Option<u8>,
        /// Make the channel public (`--public false` for private)
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        public: Option<bool>,
        /// Comma-separated user IDs to add
        #[arg(long, value_delimiter = ',')]
        user_ids: Vec<u64>,
    },
    /// Update a channel
    Update {
        channel_id: u64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Channel color (0-11)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=11))]
        color: Option<u8>,
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        public: Option<bool>,
    },
    /// Archive a channel
    Archive { channel_id: u64 },
    /// Unarchive a channel
    Unarchive { channel_id: u64 },
    /// Delete a channel (it must be archived first)
    Delete { channel_id: u64 },
    /// Add a user to a channel
    AddUser { channel_id: u64, user_id: u64 },
    /// Remove a user from a channel
    RemoveUser { channel_id: u64, user_id: u64 },
}

pub async fn run<W: Write>(
    client: &TwistClient,
    command: ChannelsCommand,
    out: &mut W,
) -> Result<()> {
    match command {
        ChannelsCommand::List {
            workspace_id,
            archived,
        } => {
            let channels = client
                .get_channels(workspace_id, archived)
                .await
                .context("failed to get channels")?;

            if channels.is_empty() {
                writeln!(out, "No channels found.")?;
                return Ok(());
            }

            let mut table = Table::new(["ID", "NAME", "PUBLIC", "ARCHIVED"]);
            for ch in &channels {
                table.row([
                    ch.id.to_string(),
                    ch.name.clone(),
                    ch.public.to_string(),
                    ch.archived.to_string(),
                ]);
            }
            table.write_to(out)?;
        }
        ChannelsCommand::Show { channel_id } => {
            let channel = client
                .get_channel(channel_id)
                .await
                .context("failed to get channel")?;

            writeln!(out, "ID: {}", channel.id)?;
            writeln!(out, "Name: {}", channel.name)?;
            writeln!(out, "Description: {}", channel.description)?;
            writeln!(out, "Workspace ID: {}", channel.workspace_id)?;
            writeln!(out, "Public: {}", channel.public)?;
            writeln!(out, "Archived: {}", channel.archived)?;
            writeln!(out, "Color: {}", channel.color)?;
            writeln!(out, "Icon: {}", channel.icon)?;
        }
        ChannelsCommand::Create {
            workspace_id,
            name,
            description,
            color,
            icon,
            public,
            user_ids,
        } => {
            let options = ChannelOptions {
                description,
                color,
                icon,
                public,
                user_ids: (!user_ids.is_empty()).then_some(user_ids),
            };
            let channel = client
                .create_channel(workspace_id, &name, &options)
                .await
                .context("failed to create channel")?;

            writeln!(out, "Channel created successfully!")?;
            writeln!(out, "Channel ID: {}", channel.id)?;
            writeln!(out, "Name: {}", channel.name)?;
        }
        ChannelsCommand::Update {
            channel_id,
            name,
            description,
            color,
            public,
        } => {
            let changes = ChannelUpdate {
                name,
                description,
                color,
                public,
            };
            if changes.is_empty() {
                bail!("no updates specified; use flags like --name, --description, --color, or --public");
            }

            let channel = client
                .update_channel(channel_id, &changes)
                .await
                .context("failed to update channel")?;

            writeln!(out, "Channel updated successfully!")?;
            writeln!(out, "Channel ID: {}", channel.id)?;
            writeln!(out, "Name: {}", channel.name)?;
        }
        ChannelsCommand::Archive { channel_id } => {
            client
                .archive_channel(channel_id)
                .await
                .context("failed to archive channel")?;
            writeln!(out, "Channel {} archived successfully", channel_id)?;
        }
        ChannelsCommand::Unarchive { channel_id } => {
            client
                .unarchive_channel(channel_id)
                .await
                .context("failed to unarchive channel")?;
            writeln!(out, "Channel {} unarchived successfully", channel_id)?;
        }
        ChannelsCommand::Delete { channel_id } => {
            client
                .delete_channel(channel_id)
                .await
                .context("failed to delete channel")?;
            writeln!(out, "Channel {} deleted successfully", channel_id)?;
        }
        ChannelsCommand::AddUser {
            channel_id,
            user_id,
        } => {
            client
                .add_channel_user(channel_id, user_id)
                .await
                .context("failed to add user to channel")?;
            writeln!(
                out,
                "User {} added to channel {} successfully",
                user_id, channel_id
            )?;
        }
        ChannelsCommand::RemoveUser {
            channel_id,
            user_id,
        } => {
            client
                .remove_channel_user(channel_id, user_id)
                .await
                .context("failed to remove user from channel")?;
            writeln!(
                out,
                "User {} removed from channel {} successfully",
                user_id, channel_id
            )?;
        }
    }
    Ok(())
}
