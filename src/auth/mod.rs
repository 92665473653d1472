//! Token resolution and the `auth` subcommands
//!
//! A Twist personal access token is looked up from, in order: the `--token`
//! flag, the `TWIST_API_TOKEN` environment variable, the config file. When
//! none is set the user is prompted once and the answer is persisted.

use std::fmt;
use std::io::Write;

use anyhow::{bail, Context, Result};
use clap::Subcommand;

use crate::api::client::DEFAULT_BASE_URL;
use crate::config::Config;

pub const TOKEN_ENV: &str = "TWIST_API_TOKEN";
pub const BASE_URL_ENV: &str = "TWIST_API_URL";

#[derive(Subcommand, Debug)]
pub enum AuthCommand {
    /// Store a personal access token (prompts unless --token is given)
    Login,
    /// Remove the stored token
    Logout,
    /// Show where the active token comes from
    Status,
}

/// Where the active token was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Flag,
    Env,
    Config,
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenSource::Flag => "--token flag",
            TokenSource::Env => TOKEN_ENV,
            TokenSource::Config => "config file",
        };
        f.write_str(s)
    }
}

/// First non-blank token in priority order.
pub fn pick_token(
    flag: Option<&str>,
    env: Option<&str>,
    config: Option<&str>,
) -> Option<(String, TokenSource)> {
    [
        (flag, TokenSource::Flag),
        (env, TokenSource::Env),
        (config, TokenSource::Config),
    ]
    .into_iter()
    .find_map(|(value, source)| {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| (v.to_string(), source))
    })
}

/// Endpoint override from the environment or config, if any.
pub fn pick_base_url(env: Option<&str>, config: &Config) -> Option<String> {
    env.map(str::trim)
        .filter(|v| !v.is_empty())
        .or(config.base_url.as_deref())
        .map(str::to_string)
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Token for API commands, prompting and saving one if nothing is configured.
pub fn resolve_token(flag: Option<&str>, config: &mut Config) -> Result<String> {
    let env = env_var(TOKEN_ENV);
    if let Some((token, source)) = pick_token(flag, env.as_deref(), config.token()) {
        tracing::debug!("Using token from {}", source);
        return Ok(token);
    }

    let token = prompt_for_token()?;
    config.set_token(token.clone());
    config.save().context("Failed to save token")?;
    eprintln!("Token saved successfully!");
    Ok(token)
}

pub fn resolve_base_url(config: &Config) -> Option<String> {
    pick_base_url(env_var(BASE_URL_ENV).as_deref(), config)
}

fn prompt_for_token() -> Result<String> {
    eprintln!("No Twist API token found.");
    eprintln!("To get your personal access token:");
    eprintln!("1. Go to https://twist.com/integrations");
    eprintln!("2. Create a new integration or select an existing one");
    eprintln!("3. Copy your personal access token from the OAuth section");
    eprintln!();

    let token: String = dialoguer::Password::new()
        .with_prompt("Enter your Twist API token")
        .interact()
        .context("Failed to read token")?;

    let token = token.trim().to_string();
    if token.is_empty() {
        bail!("token cannot be empty");
    }
    Ok(token)
}

/// Show only the ends of a token
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

pub fn run<W: Write>(command: AuthCommand, flag: Option<&str>, out: &mut W) -> Result<()> {
    match command {
        AuthCommand::Login => {
            let mut config = Config::load()?;
            let token = match flag.map(str::trim).filter(|t| !t.is_empty()) {
                Some(token) => token.to_string(),
                None => prompt_for_token()?,
            };
            config.set_token(token);
            config.save().context("Failed to save token")?;
            writeln!(out, "Token saved to {}", Config::config_path()?.display())?;
        }
        AuthCommand::Logout => {
            let mut config = Config::load()?;
            config.clear_token();
            config.save()?;
            writeln!(out, "Logged out.")?;
        }
        AuthCommand::Status => {
            let config = Config::load()?;
            let env = env_var(TOKEN_ENV);
            let token = pick_token(flag, env.as_deref(), config.token());
            let base_url = resolve_base_url(&config);
            write_status(out, token, base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;
        }
    }
    Ok(())
}

fn write_status<W: Write>(
    out: &mut W,
    token: Option<(String, TokenSource)>,
    base_url: &str,
) -> Result<()> {
    match token {
        Some((token, source)) => {
            writeln!(out, "Token:    {} (from {})", mask_token(&token), source)?;
        }
        None => {
            writeln!(out, "Token:    none (run `twist auth login`)")?;
        }
    }
    writeln!(out, "Endpoint: {}", base_url)?;
    Ok(())
}
