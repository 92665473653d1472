//! `twist search`

use std::io::Write;

use anyhow::{Context, Result};
use clap::Subcommand;

use super::threads::display_title;
use crate::api::TwistClient;
use crate::output::{self, Table};

#[derive(Subcommand, Debug)]
pub enum SearchCommand {
    /// Search threads in a workspace
    Threads {
        workspace_id: u64,
        query: String,
        /// Limit the search to one channel
        #[arg(long)]
        channel_id: Option<u64>,
        /// Maximum number of results
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        limit: Option<u32>,
    },
    /// Search thread comments in a workspace
    Messages {
        workspace_id: u64,
        query: String,
        /// Maximum number of results
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        limit: Option<u32>,
    },
    /// Search direct message conversations
    Conversations {
        query: String,
        /// Maximum number of results
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        limit: Option<u32>,
    },
}

pub async fn run<W: Write>(client: &TwistClient, command: SearchCommand, out: &mut W) -> Result<()> {
    match command {
        SearchCommand::Threads {
            workspace_id,
            query,
            channel_id,
            limit,
        } => {
            let threads = client
                .search_threads(workspace_id, &query, channel_id, limit)
                .await
                .context("failed to search threads")?;

            if threads.is_empty() {
                writeln!(out, "No threads found matching the query.")?;
                return Ok(());
            }

            let mut table = Table::new(["ID", "TITLE", "CHANNEL", "LAST UPDATED"]);
            for t in &threads {
                table.row([
                    t.id.to_string(),
                    output::truncate(display_title(t), 40),
                    t.channel_id.to_string(),
                    output::timestamp(t.last_updated_ts, output::DATE_TIME),
                ]);
            }
            table.write_to(out)?;
            writeln!(out, "\nFound {} thread(s)", threads.len())?;
        }
        SearchCommand::Messages {
            workspace_id,
            query,
            limit,
        } => {
            let comments = client
                .search_comments(workspace_id, &query, limit)
                .await
                .context("failed to search messages")?;

            if comments.is_empty() {
                writeln!(out, "No messages found matching the query.")?;
                return Ok(());
            }

            let mut table = Table::new(["ID", "THREAD", "CONTENT", "POSTED"]);
            for c in &comments {
                table.row([
                    c.id.to_string(),
                    c.thread_id.to_string(),
                    output::truncate(&c.content, 50),
                    output::timestamp(c.posted_ts, output::DATE_TIME),
                ]);
            }
            table.write_to(out)?;
            writeln!(out, "\nFound {} message(s)", comments.len())?;
        }
        SearchCommand::Conversations { query, limit } => {
            let messages = client
                .search_conversation_messages(&query, limit)
                .await
                .context("failed to search conversations")?;

            if messages.is_empty() {
                writeln!(out, "No conversation messages found matching the query.")?;
                return Ok(());
            }

            let mut table = Table::new(["ID", "CONVERSATION", "CONTENT", "POSTED"]);
            for m in &messages {
                table.row([
                    m.id.to_string(),
                    m.conversation_id.to_string(),
                    output::truncate(&m.content, 50),
                    output::timestamp(m.created_ts, output::DATE_TIME),
                ]);
            }
            table.write_to(out)?;
            writeln!(out, "\nFound {} message(s)", messages.len())?;
        }
    }
    Ok(())
}
