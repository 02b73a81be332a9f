//! Tests for validated configuration.

use super::ConfigError;
use super::cli::Cli;
use super::toml::TomlConfig;
use super::validated::ValidatedConfig;

use crate::auth::AuthConfig;

/// Helper to create `send` CLI args from a slice
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["hookchat", "send"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

/// Helper to parse TOML config
fn toml(content: &str) -> TomlConfig {
    TomlConfig::parse(content).unwrap()
}

mod precedence_tests;
