//! `twist workspaces`

use std::io::Write;

use anyhow::{Context, Result};
use clap::Subcommand;

use crate::api::TwistClient;
use crate::output::Table;

#[derive(Subcommand, Debug)]
pub enum WorkspacesCommand {
    /// List all workspaces you have access to
    List,
}

pub async fn run<W: Write>(
    client: &TwistClient,
    command: WorkspacesCommand,
    out: &mut W,
) -> Result<()> {
    match command {
        WorkspacesCommand::List => {
            let workspaces = client
                .get_workspaces()
                .await
                .context("failed to get workspaces")?;

            if workspaces.is_empty() {
                writeln!(out, "No workspaces found.")?;
                return Ok(());
            }

            let mut table = Table::new(["ID", "NAME", "PLAN"]);
            for ws in &workspaces {
                table.row([ws.id.to_string(), ws.name.clone(), ws.plan.clone()]);
            }
            table.write_to(out)?;
        }
    }
    Ok(())
}
