//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};

use url::Url;

use crate::auth::AuthConfig;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config,
/// or [`ValidatedConfig::load`] to also locate and read the config file.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Webhook URL (required)
    pub url: Url,

    /// Credentials applied to every request
    pub auth: AuthConfig,

    /// Directory where media replies are saved
    pub output_dir: PathBuf,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ url: {}, auth: {}, output_dir: {} }}",
            self.url,
            self.auth.scheme(),
            self.output_dir.display(),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values, field by field.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The URL is missing or invalid
    /// - The auth type is not one of `none`, `basic`, `header`, `jwt`
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let url = Self::resolve_url(cli, toml)?;
        let auth = Self::resolve_auth(cli, toml)?;
        let output_dir = Self::resolve_output_dir(cli, toml);

        Ok(Self {
            url,
            auth,
            output_dir,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and the config file.
    ///
    /// The file is `cli.config` if set, otherwise the per-user config file
    /// from [`defaults::config_file`] when it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let path = cli
            .config
            .clone()
            .or_else(|| defaults::config_file().filter(|p| p.is_file()));

        let toml = match path {
            Some(ref path) => Some(TomlConfig::load(path)?),
            None => None,
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        // CLI takes precedence
        let url_str = cli
            .url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.webhook.url.as_deref()))
            .ok_or_else(|| {
                ConfigError::missing(field::URL, "Use --url or set webhook.url in config file")
            })?;

        Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
            url: url_str.to_string(),
            reason: e.to_string(),
        })
    }

    fn resolve_auth(cli: &Cli, toml: Option<&TomlConfig>) -> Result<AuthConfig, ConfigError> {
        let section = toml.map(|t| &t.auth);

        // Priority: CLI explicit > TOML > default, for every field separately
        let kind = cli
            .auth
            .map(|k| k.as_str().to_string())
            .or_else(|| section.and_then(|s| s.kind.clone()))
            .unwrap_or_else(|| defaults::AUTH_TYPE.to_string());

        match kind.trim().to_lowercase().as_str() {
            "none" | "" => Ok(AuthConfig::None),
            "basic" => Ok(AuthConfig::Basic {
                username: merge(cli.username.as_ref(), section.and_then(|s| s.username.as_ref())),
                password: merge(cli.password.as_ref(), section.and_then(|s| s.password.as_ref())),
            }),
            "header" => Ok(AuthConfig::Header {
                header_name: merge(
                    cli.header_name.as_ref(),
                    section.and_then(|s| s.header_name.as_ref()),
                ),
                header_value: merge(
                    cli.header_value.as_ref(),
                    section.and_then(|s| s.header_value.as_ref()),
                ),
            }),
            "jwt" | "bearer" => Ok(AuthConfig::Jwt {
                token: merge(cli.token.as_ref(), section.and_then(|s| s.token.as_ref())),
            }),
            _ => Err(ConfigError::InvalidAuthType { value: kind }),
        }
    }

    fn resolve_output_dir(cli: &Cli, toml: Option<&TomlConfig>) -> PathBuf {
        cli.send_args()
            .and_then(|args| args.output_dir.clone())
            .or_else(|| toml.and_then(|t| t.output.dir.as_ref().map(PathBuf::from)))
            .unwrap_or_else(defaults::output_dir)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn merge(cli_value: Option<&String>, toml_value: Option<&String>) -> Option<String> {
    cli_value.or(toml_value).cloned()
}
