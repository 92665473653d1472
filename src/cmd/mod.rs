//! CLI command handlers
//!
//! Each module owns the clap subcommand enum for one resource family and a
//! `run` function that calls the API and renders the result to `out`.

pub mod attachments;
pub mod channels;
pub mod comments;
pub mod conversations;
pub mod groups;
pub mod reactions;
pub mod search;
pub mod threads;
pub mod users;
pub mod workspaces;

use std::io::{self, Write};
use std::str::FromStr;

/// Comma separated user ids given as a single positional argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIds(pub Vec<u64>);

impl FromStr for UserIds {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ids = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<u64>()
                    .map_err(|_| format!("invalid user ID: {}", part))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if ids.is_empty() {
            return Err("at least one user ID is required".to_string());
        }
        Ok(UserIds(ids))
    }
}

/// Rejoin a message that was given as several shell words.
fn join_words(words: &[String]) -> String {
    words.join(" ")
}

fn write_notified<W: Write>(out: &mut W, recipients: &[u64]) -> io::Result<()> {
    if !recipients.is_empty() {
        writeln!(out, "Notified {} user(s)", recipients.len())?;
    }
    Ok(())
}
