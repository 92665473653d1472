//! `twist threads`

use std::io::Write;

use anyhow::{bail, Context, Result};
use clap::Subcommand;

use super::{join_words, write_notified};
use crate::api::TwistClient;
use crate::models::{Comment, Thread, ThreadUpdate};
use crate::output::{self, Table, HEAVY_RULE, LIGHT_RULE};

#[derive(Subcommand, Debug)]
pub enum ThreadsCommand {
    /// List all threads in a channel
    List { channel_id: u64 },
    /// Show a thread with its content and replies
    Show { thread_id: u64 },
    /// Create a new thread
    Create {
        channel_id: u64,
        title: String,
        #[arg(required = true, num_args = 1..)]
        content: Vec<String>,
        /// Comma-separated user IDs to notify
        #[arg(long, value_delimiter = ',')]
        notify: Vec<u64>,
    },
    /// Reply to a thread
    Reply {
        thread_id: u64,
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
        /// Comma-separated user IDs to notify
        #[arg(long, value_delimiter = ',')]
        notify: Vec<u64>,
    },
    /// Update a thread's title and/or content
    Update {
        thread_id: u64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Delete a thread
    Delete { thread_id: u64 },
    /// Pin a thread to the top of its channel
    Pin { thread_id: u64 },
    /// Remove the pin from a thread
    Unpin { thread_id: u64 },
    /// Star a thread
    Star { thread_id: u64 },
    /// Remove the star from a thread
    Unstar { thread_id: u64 },
    /// Archive a thread
    Archive { thread_id: u64 },
    /// Unarchive a thread
    Unarchive { thread_id: u64 },
}

pub async fn run<W: Write>(client: &TwistClient, command: ThreadsCommand, out: &mut W) -> Result<()> {
    match command {
        ThreadsCommand::List { channel_id } => {
            let threads = client
                .get_threads(channel_id)
                .await
                .context("failed to get threads")?;

            if threads.is_empty() {
                writeln!(out, "No threads found in this channel.")?;
                return Ok(());
            }

            let mut table = Table::new(["ID", "TITLE", "COMMENTS", "LAST UPDATED"]);
            for t in &threads {
                table.row([
                    t.id.to_string(),
                    output::truncate(display_title(t), 50),
                    t.comment_count.to_string(),
                    output::timestamp(t.last_updated_ts, output::DATE_TIME),
                ]);
            }
            table.write_to(out)?;
        }
        ThreadsCommand::Show { thread_id } => {
            let thread = client
                .get_thread(thread_id)
                .await
                .context("failed to get thread")?;
            let comments = client
                .get_comments(thread_id)
                .await
                .context("failed to get comments")?;
            write_thread(out, &thread, &comments)?;
        }
        ThreadsCommand::Create {
            channel_id,
            title,
            content,
            notify,
        } => {
            let thread = client
                .create_thread(channel_id, &title, &join_words(&content), &notify)
                .await
                .context("failed to create thread")?;

            writeln!(out, "Thread created successfully!")?;
            writeln!(out, "Thread ID: {}", thread.id)?;
            writeln!(out, "Title: {}", thread.title)?;
            write_notified(out, &notify)?;
        }
        ThreadsCommand::Reply {
            thread_id,
            message,
            notify,
        } => {
            let comment = client
                .post_comment(thread_id, &join_words(&message), &notify)
                .await
                .context("failed to post reply")?;

            writeln!(out, "Reply posted successfully (comment #{})", comment.id)?;
            write_notified(out, &notify)?;
        }
        ThreadsCommand::Update {
            thread_id,
            title,
            content,
        } => {
            let changes = ThreadUpdate { title, content };
            if changes.is_empty() {
                bail!("no updates specified; use --title or --content flags");
            }

            let thread = client
                .update_thread(thread_id, &changes)
                .await
                .context("failed to update thread")?;

            writeln!(out, "Thread updated successfully!")?;
            writeln!(out, "Thread ID: {}", thread.id)?;
            writeln!(out, "Title: {}", thread.title)?;
        }
        ThreadsCommand::Delete { thread_id } => {
            client
                .delete_thread(thread_id)
                .await
                .context("failed to delete thread")?;
            writeln!(out, "Thread {} deleted successfully", thread_id)?;
        }
        ThreadsCommand::Pin { thread_id } => {
            client.pin_thread(thread_id).await.context("failed to pin thread")?;
            writeln!(out, "Thread {} pinned successfully", thread_id)?;
        }
        ThreadsCommand::Unpin { thread_id } => {
            client
                .unpin_thread(thread_id)
                .await
                .context("failed to unpin thread")?;
            writeln!(out, "Thread {} unpinned successfully", thread_id)?;
        }
        ThreadsCommand::Star { thread_id } => {
            client.star_thread(thread_id).await.context("failed to star thread")?;
            writeln!(out, "Thread {} starred successfully", thread_id)?;
        }
        ThreadsCommand::Unstar { thread_id } => {
            client
                .unstar_thread(thread_id)
                .await
                .context("failed to unstar thread")?;
            writeln!(out, "Thread {} unstarred successfully", thread_id)?;
        }
        ThreadsCommand::Archive { thread_id } => {
            client
                .archive_thread(thread_id)
                .await
                .context("failed to archive thread")?;
            writeln!(out, "Thread {} archived successfully", thread_id)?;
        }
        ThreadsCommand::Unarchive { thread_id } => {
            client
                .unarchive_thread(thread_id)
                .await
                .context("failed to unarchive thread")?;
            writeln!(out, "Thread {} unarchived successfully", thread_id)?;
        }
    }
    Ok(())
}

pub(crate) fn display_title(thread: &Thread) -> &str {
    if thread.title.is_empty() {
        "(no title)"
    } else {
        &thread.title
    }
}

fn write_thread<W: Write>(out: &mut W, thread: &Thread, comments: &[Comment]) -> Result<()> {
    writeln!(out, "{}", HEAVY_RULE)?;
    writeln!(out, "Thread #{}: {}", thread.id, thread.title)?;
    writeln!(
        out,
        "Posted: {}",
        output::timestamp(thread.posted_ts, output::DATE_TIME_SECONDS)
    )?;
    writeln!(out, "Comments: {}", thread.comment_count)?;
    writeln!(out, "{}", HEAVY_RULE)?;
    writeln!(out)?;
    writeln!(out, "{}", thread.content)?;
    writeln!(out)?;

    if !comments.is_empty() {
        writeln!(out, "{}", LIGHT_RULE)?;
        writeln!(out, "Replies ({}):", comments.len())?;
        writeln!(out, "{}", LIGHT_RULE)?;
        for (i, comment) in comments.iter().enumerate() {
            writeln!(out)?;
            writeln!(
                out,
                "[{}] User {} • {}",
                i + 1,
                comment.creator,
                output::timestamp(comment.posted_ts, output::DATE_TIME_SECONDS)
            )?;
            writeln!(out, "{}", comment.content)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockServer;
    use serde_json::json;

    async fn run_to_string(server: &MockServer, command: ThreadsCommand) -> Result<String> {
        let mut out = Vec::new();
        run(&server.client(), command, &mut out).await?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_list_truncates_and_names_untitled() {
        let server = MockServer::start().await;
        let long_title = "x".repeat(60);
        server.respond_json(
            "GET",
            "/threads/get",
            json!([
                {"id": 1, "title": long_title, "comment_count": 3},
                {"id": 2, "title": ""}
            ]),
        ).await;

        let text = run_to_string(&server, ThreadsCommand::List { channel_id: 5 })
            .await
            .unwrap();
        assert!(text.contains(&format!("{}...", "x".repeat(47))));
        assert!(!text.contains(&"x".repeat(48)));
        assert!(text.contains("(no title)"));
    }

    #[tokio::test]
    async fn test_show_fetches_thread_then_comments() {
        let server = MockServer::start().await;
        server.respond_json(
            "GET",
            "/threads/getone",
            json!({"id": 42, "title": "Release", "content": "Ship it", "comment_count": 2}),
        ).await;
        server.respond_json(
            "GET",
            "/comments/get",
            json!([
                {"id": 1, "creator": 7, "content": "first"},
                {"id": 2, "creator": 8, "content": "second"}
            ]),
        ).await;

        let text = run_to_string(&server, ThreadsCommand::Show { thread_id: 42 })
            .await
            .unwrap();
        assert!(text.contains("Thread #42: Release\n"));
        assert!(text.contains("\nShip it\n"));
        assert!(text.contains("Replies (2):"));
        assert!(text.contains("[1] User 7 • "));
        assert!(text.contains("[2] User 8 • "));

        let reqs = server.requests();
        assert_eq!(reqs[0].path, "/threads/getone");
        assert_eq!(reqs[1].path, "/comments/get");
        assert_eq!(reqs[1].query_param("thread_id").as_deref(), Some("42"));
    }

    #[tokio::test]
    async fn test_show_without_replies_omits_section() {
        let server = MockServer::start().await;
        server.respond_json("GET", "/threads/getone", json!({"id": 42, "title": "t"})).await;
        server.respond_json("GET", "/comments/get", json!([])).await;

        let text = run_to_string(&server, ThreadsCommand::Show { thread_id: 42 })
            .await
            .unwrap();
        assert!(!text.contains("Replies"));
    }

    #[tokio::test]
    async fn test_create_joins_content_and_reports_notified() {
        let server = MockServer::start().await;
        server.respond_json("POST", "/threads/add", json!({"id": 77, "title": "Plan"})).await;

        let text = run_to_string(
            &server,
            ThreadsCommand::Create {
                channel_id: 5,
                title: "Plan".into(),
                content: vec!["draft".into(), "attached".into()],
                notify: vec![1, 2],
            },
        )
        .await
        .unwrap();

        assert_eq!(
            text,
            "Thread created successfully!\nThread ID: 77\nTitle: Plan\nNotified 2 user(s)\n"
        );
        assert_eq!(
            server.requests()[0].json(),
            json!({"channel_id": 5, "title": "Plan", "content": "draft attached", "recipients": [1, 2]})
        );
    }

    #[tokio::test]
    async fn test_reply_message() {
        let server = MockServer::start().await;
        server.respond_json("POST", "/comments/add", json!({"id": 900})).await;

        let text = run_to_string(
            &server,
            ThreadsCommand::Reply {
                thread_id: 42,
                message: vec!["looks".into(), "good".into()],
                notify: vec![],
            },
        )
        .await
        .unwrap();
        assert_eq!(text, "Reply posted successfully (comment #900)\n");
    }

    #[tokio::test]
    async fn test_update_without_fields_fails_locally() {
        let server = MockServer::start().await;
        let result = run_to_string(
            &server,
            ThreadsCommand::Update {
                thread_id: 42,
                title: None,
                content: None,
            },
        )
        .await;
        tokio_test::assert_err!(result);
        assert!(server.requests().is_empty());
    }

    #[tokio::test]
    async fn test_pin_message() {
        let server = MockServer::start().await;
        server.respond_json("POST", "/threads/pin", json!({})).await;

        let text = run_to_string(&server, ThreadsCommand::Pin { thread_id: 42 })
            .await
            .unwrap();
        assert_eq!(text, "Thread 42 pinned successfully\n");
    }
}
