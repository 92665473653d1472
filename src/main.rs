//! Twist CLI - command line client for the Twist team messaging API
//!
//! Authenticate with a personal access token to manage workspaces, channels,
//! threads and direct conversations from the terminal.

mod api;
mod auth;
mod cmd;
mod config;
mod models;
mod output;

use std::io::{self, Write};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{ApiError, TwistClient};
use auth::AuthCommand;
use cmd::attachments::AttachmentsCommand;
use cmd::channels::ChannelsCommand;
use cmd::comments::CommentsCommand;
use cmd::conversations::ConversationsCommand;
use cmd::groups::GroupsCommand;
use cmd::reactions::ReactionsCommand;
use cmd::search::SearchCommand;
use cmd::threads::ThreadsCommand;
use cmd::users::UsersCommand;
use cmd::workspaces::WorkspacesCommand;
use config::Config;

#[derive(Parser)]
#[command(name = "twist", version)]
#[command(about = "Command line interface for Twist", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Twist API token (or set TWIST_API_TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage Twist workspaces
    #[command(subcommand)]
    Workspaces(WorkspacesCommand),

    /// View users in a workspace
    #[command(subcommand)]
    Users(UsersCommand),

    /// Manage channels
    #[command(subcommand)]
    Channels(ChannelsCommand),

    /// Manage threads
    #[command(subcommand)]
    Threads(ThreadsCommand),

    /// Manage comments on threads
    #[command(subcommand)]
    Comments(CommentsCommand),

    /// Manage direct message conversations
    #[command(subcommand)]
    Conversations(ConversationsCommand),

    /// Manage groups
    #[command(subcommand)]
    Groups(GroupsCommand),

    /// Add, remove and view reactions
    #[command(subcommand)]
    Reactions(ReactionsCommand),

    /// Upload, download and view attachments
    #[command(subcommand)]
    Attachments(AttachmentsCommand),

    /// Search threads, messages and conversations
    #[command(subcommand)]
    Search(SearchCommand),

    /// Manage the stored API token
    #[command(subcommand)]
    Auth(AuthCommand),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {:#}", err);
        if is_unauthorized(&err) {
            eprintln!("Hint: the token was rejected; run `twist auth login` to store a new one");
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let command = match cli.command {
        Commands::Auth(command) => return auth::run(command, cli.token.as_deref(), &mut out),
        command => command,
    };

    let mut config = Config::load()?;
    let token = auth::resolve_token(cli.token.as_deref(), &mut config)?;
    let client = match auth::resolve_base_url(&config) {
        Some(base_url) => TwistClient::with_base_url(token, &base_url)?,
        None => TwistClient::new(token)?,
    };
    tracing::debug!("Using API endpoint {}", client.base_url());

    dispatch(&client, command, &mut out).await?;
    out.flush()?;
    Ok(())
}

async fn dispatch<W: Write>(client: &TwistClient, command: Commands, out: &mut W) -> Result<()> {
    match command {
        Commands::Workspaces(c) => cmd::workspaces::run(client, c, out).await,
        Commands::Users(c) => cmd::users::run(client, c, out).await,
        Commands::Channels(c) => cmd::channels::run(client, c, out).await,
        Commands::Threads(c) => cmd::threads::run(client, c, out).await,
        Commands::Comments(c) => cmd::comments::run(client, c, out).await,
        Commands::Conversations(c) => cmd::conversations::run(client, c, out).await,
        Commands::Groups(c) => cmd::groups::run(client, c, out).await,
        Commands::Reactions(c) => cmd::reactions::run(client, c, out).await,
        Commands::Attachments(c) => cmd::attachments::run(client, c, out).await,
        Commands::Search(c) => cmd::search::run(client, c, out).await,
        Commands::Auth(_) => bail!("auth commands do not take an API client"),
    }
}

/// True when any layer of the error is a 401 from the service.
fn is_unauthorized(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|e| e.downcast_ref::<ApiError>())
        .any(|e| e.status() == Some(401))
}
