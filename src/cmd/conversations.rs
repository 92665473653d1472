//! `twist conversations`

use std::io::Write;

use anyhow::{Context, Result};
use clap::Subcommand;

use super::{join_words, UserIds};
use crate::api::TwistClient;
use crate::models::ConversationMessage;
use crate::output::{self, Table, HEAVY_RULE};

#[derive(Subcommand, Debug)]
pub enum ConversationsCommand {
    /// List all direct message conversations
    List,
    /// Show the messages in a conversation
    Show { conversation_id: u64 },
    /// Send a direct message to one or more users
    Send {
        /// Recipient user ID(s), comma-separated
        user_ids: UserIds,
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
    /// Archive a conversation
    Archive { conversation_id: u64 },
    /// Unarchive a conversation
    Unarchive { conversation_id: u64 },
    /// Mute notifications from a conversation
    Mute { conversation_id: u64 },
    /// Unmute notifications from a conversation
    Unmute { conversation_id: u64 },
    /// Mark all messages in a conversation as read
    MarkRead { conversation_id: u64 },
    /// Mark a conversation as unread
    MarkUnread { conversation_id: u64 },
}

pub async fn run<W: Write>(
    client: &TwistClient,
    command: ConversationsCommand,
    out: &mut W,
) -> Result<()> {
    match command {
        ConversationsCommand::List => {
            let conversations = client
                .get_conversations()
                .await
                .context("failed to get conversations")?;

            if conversations.is_empty() {
                writeln!(out, "No conversations found.")?;
                return Ok(());
            }

            let mut table = Table::new(["ID", "PARTICIPANTS", "MESSAGES", "CREATED"]);
            for conv in &conversations {
                table.row([
                    conv.id.to_string(),
                    output::join_ids(&conv.user_ids),
                    conv.message_count.to_string(),
                    output::timestamp(conv.created_ts, output::DATE),
                ]);
            }
            table.write_to(out)?;
        }
        ConversationsCommand::Show { conversation_id } => {
            let messages = client
                .get_conversation_messages(conversation_id)
                .await
                .context("failed to get messages")?;
            write_conversation(out, conversation_id, &messages)?;
        }
        ConversationsCommand::Send { user_ids, message } => {
            let sent = client
                .send_direct_message(&user_ids.0, &join_words(&message))
                .await
                .context("failed to send message")?;

            writeln!(
                out,
                "Message sent successfully (message #{} in conversation #{})",
                sent.message.id, sent.conversation.id
            )?;
        }
        ConversationsCommand::Archive { conversation_id } => {
            client
                .archive_conversation(conversation_id)
                .await
                .context("failed to archive conversation")?;
            writeln!(out, "Conversation {} archived successfully", conversation_id)?;
        }
        ConversationsCommand::Unarchive { conversation_id } => {
            client
                .unarchive_conversation(conversation_id)
                .await
                .context("failed to unarchive conversation")?;
            writeln!(out, "Conversation {} unarchived successfully", conversation_id)?;
        }
        ConversationsCommand::Mute { conversation_id } => {
            client
                .mute_conversation(conversation_id)
                .await
                .context("failed to mute conversation")?;
            writeln!(out, "Conversation {} muted successfully", conversation_id)?;
        }
        ConversationsCommand::Unmute { conversation_id } => {
            client
                .unmute_conversation(conversation_id)
                .await
                .context("failed to unmute conversation")?;
            writeln!(out, "Conversation {} unmuted successfully", conversation_id)?;
        }
        ConversationsCommand::MarkRead { conversation_id } => {
            client
                .mark_conversation_read(conversation_id)
                .await
                .context("failed to mark conversation as read")?;
            writeln!(out, "Conversation {} marked as read", conversation_id)?;
        }
        ConversationsCommand::MarkUnread { conversation_id } => {
            client
                .mark_conversation_unread(conversation_id)
                .await
                .context("failed to mark conversation as unread")?;
            writeln!(out, "Conversation {} marked as unread", conversation_id)?;
        }
    }
    Ok(())
}

fn write_conversation<W: Write>(
    out: &mut W,
    conversation_id: u64,
    messages: &[ConversationMessage],
) -> Result<()> {
    writeln!(out, "{}", HEAVY_RULE)?;
    writeln!(out, "Conversation #{}", conversation_id)?;
    writeln!(out, "{}", HEAVY_RULE)?;

    if messages.is_empty() {
        writeln!(out)?;
        writeln!(out, "No messages yet.")?;
        return Ok(());
    }

    for msg in messages {
        writeln!(out)?;
        writeln!(
            out,
            "[User {}] • {}",
            msg.user_id,
            output::timestamp(msg.created_ts, output::DATE_TIME_SECONDS)
        )?;
        writeln!(out, "{}", msg.content)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockServer;
    use serde_json::json;

    async fn run_to_string(server: &MockServer, command: ConversationsCommand) -> Result<String> {
        let mut out = Vec::new();
        run(&server.client(), command, &mut out).await?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_send_reports_message_and_conversation() {
        let server = MockServer::start().await;
        server.respond_json("POST", "/conversations/get_or_create", json!({"id": 7})).await;
        server.respond_json(
            "POST",
            "/conversation_messages/add",
            json!({"id": 301, "conversation_id": 7}),
        ).await;

        let text = run_to_string(
            &server,
            ConversationsCommand::Send {
                user_ids: UserIds(vec![55]),
                message: vec!["hi".into()],
            },
        )
        .await
        .unwrap();

        assert_eq!(
            text,
            "Message sent successfully (message #301 in conversation #7)\n"
        );
        assert_eq!(server.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_send_stops_when_post_fails() {
        let server = MockServer::start().await;
        server.respond_json("POST", "/conversations/get_or_create", json!({"id": 7})).await;
        server.respond("POST", "/conversation_messages/add", 500, "boom").await;

        let err = run_to_string(
            &server,
            ConversationsCommand::Send {
                user_ids: UserIds(vec![55]),
                message: vec!["hi".into()],
            },
        )
        .await
        .unwrap_err();

        assert!(format!("{:#}", err).contains("status 500: boom"));
        assert_eq!(server.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_list_joins_participants() {
        let server = MockServer::start().await;
        server.respond_json(
            "GET",
            "/conversations/get",
            json!([{"id": 7, "user_ids": [1, 55], "message_count": 4}]),
        ).await;

        let text = run_to_string(&server, ConversationsCommand::List)
            .await
            .unwrap();
        let row = text.lines().nth(2).unwrap();
        assert!(row.starts_with("7    1, 55          4"));
    }

    #[tokio::test]
    async fn test_show_empty_conversation() {
        let server = MockServer::start().await;
        server.respond_json("GET", "/conversation_messages/get", json!([])).await;

        let text = run_to_string(&server, ConversationsCommand::Show { conversation_id: 7 })
            .await
            .unwrap();
        assert!(text.contains("Conversation #7\n"));
        assert!(text.ends_with("\nNo messages yet.\n"));
    }

    #[tokio::test]
    async fn test_show_messages() {
        let server = MockServer::start().await;
        server.respond_json(
            "GET",
            "/conversation_messages/get",
            json!([{"id": 1, "user_id": 55, "content": "hello"}]),
        ).await;

        let text = run_to_string(&server, ConversationsCommand::Show { conversation_id: 7 })
            .await
            .unwrap();
        assert!(text.contains("[User 55] • "));
        assert!(text.ends_with("hello\n"));
    }

    #[tokio::test]
    async fn test_mark_read_message() {
        let server = MockServer::start().await;
        server.respond_json("POST", "/conversations/mark_read", json!({})).await;

        let text = run_to_string(&server, ConversationsCommand::MarkRead { conversation_id: 7 })
            .await
            .unwrap();
        assert_eq!(text, "Conversation 7 marked as read\n");
    }
}
