//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use super::defaults;

/// hookchat: chat with a webhook from the terminal
///
/// Sends a message and optional attachments to a webhook and prints
/// the normalized reply.
#[derive(Debug, Parser)]
#[command(name = "hookchat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Webhook URL
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Authentication scheme
    #[arg(long = "auth", value_enum, global = true)]
    pub auth: Option<AuthKindArg>,

    /// User name for basic authentication
    #[arg(long, global = true)]
    pub username: Option<String>,

    /// Password for basic authentication
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// Header name for header authentication
    #[arg(long = "header-name", global = true)]
    pub header_name: Option<String>,

    /// Header value for header authentication
    #[arg(long = "header-value", global = true)]
    pub header_value: Option<String>,

    /// Bearer token for JWT authentication
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for hookchat
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::INIT_OUTPUT)]
        output: PathBuf,
    },

    /// Send one message to the webhook and print the reply
    Send(SendArgs),
}

/// Arguments of the `send` subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct SendArgs {
    /// Message text (may be empty when sending only attachments)
    #[arg(default_value = "")]
    pub text: String,

    /// File to attach (can be specified multiple times)
    #[arg(long = "file", short = 'f', value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Session identifier sent as `chatId` (default: a fresh UUID)
    #[arg(long = "session-id")]
    pub session_id: Option<String>,

    /// Directory where media replies are saved
    #[arg(long = "output-dir", short = 'o')]
    pub output_dir: Option<PathBuf>,

    /// Print the reply items as JSON instead of presenting them
    #[arg(long)]
    pub json: bool,
}

/// Authentication scheme argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AuthKindArg {
    /// No authentication
    None,
    /// HTTP Basic authentication
    Basic,
    /// A custom header
    Header,
    /// Bearer token
    Jwt,
}

impl AuthKindArg {
    /// Returns the scheme name as used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Basic => "basic",
            Self::Header => "header",
            Self::Jwt => "jwt",
        }
    }
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

    /// Returns the `send` arguments, if this is the send command.
    #[must_use]
    pub const fn send_args(&self) -> Option<&SendArgs> {
        match &self.command {
            Command::Send(args) => Some(args),
            Command::Init { .. } => None,
        }
    }
}
