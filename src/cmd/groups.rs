//! `twist groups`

use std::io::Write;

use anyhow::{bail, Context, Result};
use clap::Subcommand;

use crate::api::TwistClient;
use crate::models::{GroupOptions, GroupUpdate};
use crate::output::Table;

#[derive(Subcommand, Debug)]
pub enum GroupsCommand {
    /// List all groups in a workspace
    List { workspace_id: u64 },
    /// Show group details
    Show { group_id: u64 },
    /// Create a new group
    Create {
        workspace_id: u64,
        name: String,
        #[arg(long)]
        description: Option<String>,
        /// Comma-separated user IDs to add
        #[arg(long, value_delimiter = ',')]
        user_ids: Vec<u64>,
    },
    /// Update a group
    Update {
        group_id: u64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a group
    Delete { group_id: u64 },
    /// Add a user to a group
    AddUser { group_id: u64, user_id: u64 },
    /// Remove a user from a group
    RemoveUser { group_id: u64, user_id: u64 },
}

pub async fn run<W: Write>(client: &TwistClient, command: GroupsCommand, out: &mut W) -> Result<()> {
    match command {
        GroupsCommand::List { workspace_id } => {
            let groups = client
                .get_groups(workspace_id)
                .await
                .context("failed to get groups")?;

            if groups.is_empty() {
                writeln!(out, "No groups found.")?;
                return Ok(());
            }

            let mut table = Table::new(["ID", "NAME", "MEMBERS"]);
            for g in &groups {
                table.row([g.id.to_string(), g.name.clone(), g.user_ids.len().to_string()]);
            }
            table.write_to(out)?;
        }
        GroupsCommand::Show { group_id } => {
            let group = client
                .get_group(group_id)
                .await
                .context("failed to get group")?;

            writeln!(out, "ID: {}", group.id)?;
            writeln!(out, "Name: {}", group.name)?;
            writeln!(out, "Description: {}", group.description)?;
            writeln!(out, "Workspace ID: {}", group.workspace_id)?;
            writeln!(out, "Members: {}", group.user_ids.len())?;
            if !group.user_ids.is_empty() {
                writeln!(out, "User IDs: {:?}", group.user_ids)?;
            }
        }
        GroupsCommand::Create {
            workspace_id,
            name,
            description,
            user_ids,
        } => {
            let options = GroupOptions {
                description,
                user_ids: (!user_ids.is_empty()).then_some(user_ids),
            };
            let group = client
                .create_group(workspace_id, &name, &options)
                .await
                .context("failed to create group")?;

            writeln!(out, "Group created successfully!")?;
            writeln!(out, "Group ID: {}", group.id)?;
            writeln!(out, "Name: {}", group.name)?;
        }
        GroupsCommand::Update {
            group_id,
            name,
            description,
        } => {
            let changes = GroupUpdate { name, description };
            if changes.is_empty() {
                bail!("no updates specified; use flags like --name or --description");
            }

            let group = client
                .update_group(group_id, &changes)
                .await
                .context("failed to update group")?;

            writeln!(out, "Group updated successfully!")?;
            writeln!(out, "Group ID: {}", group.id)?;
            writeln!(out, "Name: {}", group.name)?;
        }
        GroupsCommand::Delete { group_id } => {
            client
                .delete_group(group_id)
                .await
                .context("failed to delete group")?;
            writeln!(out, "Group {} deleted successfully", group_id)?;
        }
        GroupsCommand::AddUser { group_id, user_id } => {
            client
                .add_group_user(group_id, user_id)
                .await
                .context("failed to add user to group")?;
            writeln!(out, "User {} added to group {} successfully", user_id, group_id)?;
        }
        GroupsCommand::RemoveUser { group_id, user_id } => {
            client
                .remove_group_user(group_id, user_id)
                .await
                .context("failed to remove user from group")?;
            writeln!(
                out,
                "User {} removed from group {} successfully",
                user_id, group_id
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockServer;
    use serde_json::json;

    async fn run_to_string(server: &MockServer, command: GroupsCommand) -> Result<String> {
        let mut out = Vec::new();
        run(&server.client(), command, &mut out).await?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_list_counts_members() {
        let server = MockServer::start().await;
        server.respond_json(
            "GET",
            "/groups/get",
            json!([{"id": 3, "name": "ops", "user_ids": [1, 2, 3]}]),
        ).await;

        let text = run_to_string(&server, GroupsCommand::List { workspace_id: 100 })
            .await
            .unwrap();
        assert_eq!(
            text,
            "ID   NAME   MEMBERS\n--   ----   -------\n3    ops    3\n"
        );
    }

    #[tokio::test]
    async fn test_show_lists_member_ids() {
        let server = MockServer::start().await;
        server.respond_json(
            "GET",
            "/groups/getone",
            json!({"id": 3, "name": "ops", "workspace_id": 100, "user_ids": [1, 2]}),
        ).await;

        let text = run_to_string(&server, GroupsCommand::Show { group_id: 3 })
            .await
            .unwrap();
        assert!(text.contains("Members: 2\n"));
        assert!(text.contains("User IDs: [1, 2]\n"));
    }

    #[tokio::test]
    async fn test_update_without_fields_fails_locally() {
        let server = MockServer::start().await;
        let result = run_to_string(
            &server,
            GroupsCommand::Update {
                group_id: 3,
                name: None,
                description: None,
            },
        )
        .await;
        tokio_test::assert_err!(result);
        assert!(server.requests().is_empty());
    }

    #[tokio::test]
    async fn test_create_with_members() {
        let server = MockServer::start().await;
        server.respond_json("POST", "/groups/add", json!({"id": 4, "name": "qa"})).await;

        let text = run_to_string(
            &server,
            GroupsCommand::Create {
                workspace_id: 100,
                name: "qa".into(),
                description: Some("testers".into()),
                user_ids: vec![5, 6],
            },
        )
        .await
        .unwrap();
        assert!(text.contains("Group ID: 4\n"));
        assert_eq!(
            server.requests()[0].json(),
            json!({"workspace_id": 100, "name": "qa", "description": "testers", "user_ids": [5, 6]})
        );
    }
}
