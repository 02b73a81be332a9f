//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Webhook configuration section
    #[serde(default)]
    pub webhook: WebhookSection,

    /// Authentication configuration section
    #[serde(default)]
    pub auth: AuthSection,

    /// Output configuration section
    #[serde(default)]
    pub output: OutputSection,
}

/// Webhook configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSection {
    /// Webhook URL
    pub url: Option<String>,
}

/// Authentication configuration section.
///
/// Every field is optional so that CLI flags can override them one by one;
/// the scheme is only assembled during validation.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthSection {
    /// Scheme: "none", "basic", "header" or "jwt"
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// User name for basic authentication
    pub username: Option<String>,

    /// Password for basic authentication
    pub password: Option<String>,

    /// Header name for header authentication
    #[serde(alias = "headerName")]
    pub header_name: Option<String>,

    /// Header value for header authentication
    #[serde(alias = "headerValue")]
    pub header_value: Option<String>,

    /// Bearer token for JWT authentication
    pub token: Option<String>,
}

/// Output configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Directory where media replies are saved
    pub dir: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# hookchat Configuration File

[webhook]
# Webhook URL (required, can be overridden by --url)
# url = "https://hooks.example.com/chat"

[auth]
# Authentication scheme: "none", "basic", "header" or "jwt" (default: none)
type = "none"

# Basic authentication (either field may be empty)
# username = "user"
# password = "secret"

# Custom header authentication (both fields are required)
# header_name = "X-Api-Key"
# header_value = "secret"

# JWT bearer token
# token = "eyJhbGciOi..."

[output]
# Directory where image, audio, video and file replies are saved (default: .)
# dir = "downloads"
"#
    .to_string()
}
