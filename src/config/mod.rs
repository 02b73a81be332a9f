//! Configuration layer for hookchat.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`], [`SendArgs`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! The webhook URL has no default: it must come from `--url` or `webhook.url`.
//!
//! Authentication is merged field by field. `--auth basic --password x` with a
//! config file that sets `auth.username` yields both credentials; the scheme
//! itself follows the same priority and defaults to `none`.
//!
//! # Config File Location
//!
//! `--config` selects the file explicitly. Without it the per-user file
//! (see [`defaults::config_file`]) is read when present; a missing default
//! file is not an error.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod validated_tests;

pub use cli::{AuthKindArg, Cli, Command, SendArgs};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
