//! CLI argument parsing using clap.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use super::defaults;

/// Slack Feedback: send user feedback to a Slack channel
///
/// Composes the feedback text into a Block Kit message with device
/// metadata and posts it to a Slack Incoming Webhook.
#[derive(Debug, Parser)]
#[command(name = "slack-feedback")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Feedback text to send
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Slack Incoming Webhook URL
    #[arg(long)]
    pub webhook: Option<String>,

    /// Identifier of the person giving feedback
    #[arg(long = "user-id")]
    pub user_id: Option<String>,

    /// Contact email of the person giving feedback
    #[arg(long)]
    pub email: Option<String>,

    /// OS name and version shown in the message
    #[arg(long = "os-version")]
    pub os_version: Option<String>,

    /// Device name or machine identifier (e.g. "iPhone16,1")
    #[arg(long)]
    pub device: Option<String>,

    /// App version shown in the message
    #[arg(long = "app-version")]
    pub app_version: Option<String>,

    /// Request timeout in seconds (default: transport default)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Print the composed message instead of sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for slack-feedback
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::INIT_OUTPUT)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns the output path if this is the init command.
    #[must_use]
    pub fn init_output(&self) -> Option<&Path> {
        match &self.command {
            Some(Command::Init { output }) => Some(output),
            None => None,
        }
    }
}
