//! `twist users`

use std::io::Write;

use anyhow::{Context, Result};
use clap::Subcommand;

use crate::api::TwistClient;
use crate::output::Table;

#[derive(Subcommand, Debug)]
pub enum UsersCommand {
    /// List all users in a workspace
    List { workspace_id: u64 },
}

pub async fn run<W: Write>(client: &TwistClient, command: UsersCommand, out: &mut W) -> Result<()> {
    match command {
        UsersCommand::List { workspace_id } => {
            let users = client
                .get_workspace_users(workspace_id)
                .await
                .context("failed to get users")?;

            if users.is_empty() {
                writeln!(out, "No users found in this workspace.")?;
                return Ok(());
            }

            let mut table = Table::new(["ID", "NAME", "EMAIL", "TYPE", "BOT", "REMOVED"]);
            for u in &users {
                table.row([
                    u.id.to_string(),
                    u.name.clone(),
                    u.email.clone(),
                    u.user_type.clone(),
                    u.bot.to_string(),
                    u.removed.to_string(),
                ]);
            }
            table.write_to(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockServer;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_users() {
        let server = MockServer::start().await;
        server.respond_json(
            "GET",
            "/workspace_users/get",
            json!([{"id": 1, "name": "Ada", "email": "ada@example.com", "user_type": "USER"}]),
        ).await;

        let mut out = Vec::new();
        run(&server.client(), UsersCommand::List { workspace_id: 100 }, &mut out)
            .await
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        let row = text.lines().nth(2).unwrap();
        assert!(row.starts_with("1    Ada    ada@example.com   USER   false"));
    }

    #[tokio::test]
    async fn test_empty_workspace() {
        let server = MockServer::start().await;
        server.respond_json("GET", "/workspace_users/get", json!([])).await;

        let mut out = Vec::new();
        run(&server.client(), UsersCommand::List { workspace_id: 100 }, &mut out)
            .await
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "No users found in this workspace.\n"
        );
    }
}
