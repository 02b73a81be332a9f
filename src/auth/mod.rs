//! Authentication header encoding for webhook requests.
//!
//! The webhook accepts one of several credential schemes. [`encode`] turns the
//! configured [`AuthConfig`] into the headers to attach to a request. It never
//! fails: missing or empty credentials simply produce no header.

#[cfg(test)]
mod mod_tests;

use std::collections::BTreeMap;
use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// Outbound header names mapped to their values.
pub type AuthHeaders = BTreeMap<String, String>;

/// Header name used by the Basic and JWT schemes.
pub const AUTHORIZATION: &str = "Authorization";

/// Credentials applied to outbound webhook requests.
///
/// Exactly one scheme is active at a time. Credential content is never
/// validated; fields that are absent or empty suppress the header.
///
/// In configuration files the scheme is selected with a `type` key:
///
/// ```toml
/// [auth]
/// type = "header"
/// header_name = "X-Api-Key"
/// header_value = "secret"
/// ```
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AuthConfig {
    /// No authentication
    #[default]
    None,
    /// HTTP Basic authentication
    Basic {
        /// User name (empty string when unset)
        #[serde(default)]
        username: Option<String>,
        /// Password (empty string when unset)
        #[serde(default)]
        password: Option<String>,
    },
    /// A single custom header
    Header {
        /// Header name
        #[serde(default, alias = "headerName")]
        header_name: Option<String>,
        /// Header value
        #[serde(default, alias = "headerValue")]
        header_value: Option<String>,
    },
    /// Bearer token
    Jwt {
        /// The token sent after `Bearer `
        #[serde(default)]
        token: Option<String>,
    },
}

impl AuthConfig {
    /// Creates a Basic scheme configuration.
    #[must_use]
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    /// Creates a custom header scheme configuration.
    #[must_use]
    pub fn header(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Header {
            header_name: Some(name.into()),
            header_value: Some(value.into()),
        }
    }

    /// Creates a bearer token scheme configuration.
    #[must_use]
    pub fn jwt(token: impl Into<String>) -> Self {
        Self::Jwt {
            token: Some(token.into()),
        }
    }

    /// Returns the scheme name (`none`, `basic`, `header` or `jwt`).
    #[must_use]
    pub const fn scheme(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Basic { .. } => "basic",
            Self::Header { .. } => "header",
            Self::Jwt { .. } => "jwt",
        }
    }
}

// Credentials must never reach the logs.
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Self::Header { header_name, .. } => f
                .debug_struct("Header")
                .field("header_name", header_name)
                .field("header_value", &"<redacted>")
                .finish(),
            Self::Jwt { .. } => f
                .debug_struct("Jwt")
                .field("token", &"<redacted>")
                .finish(),
        }
    }
}

/// Encodes the authentication configuration as request headers.
///
/// - `None`: no headers
/// - `Basic`: `Authorization: Basic base64(username:password)` when either
///   field is non-empty; an unset field counts as the empty string
/// - `Header`: `name: value` only when both are non-empty
/// - `Jwt`: `Authorization: Bearer <token>` when the token is non-empty
///
/// # Example
///
/// ```
/// use hookchat::auth::{AuthConfig, encode};
///
/// let headers = encode(&AuthConfig::jwt("abc"));
/// assert_eq!(headers.get("Authorization").map(String::as_str), Some("Bearer abc"));
/// ```
#[must_use]
pub fn encode(config: &AuthConfig) -> AuthHeaders {
    let mut headers = AuthHeaders::new();

    match config {
        AuthConfig::None => {}
        AuthConfig::Basic { username, password } => {
            let username = username.as_deref().unwrap_or_default();
            let password = password.as_deref().unwrap_or_default();

            if !username.is_empty() || !password.is_empty() {
                let credentials = STANDARD.encode(format!("{username}:{password}"));
                headers.insert(AUTHORIZATION.to_string(), format!("Basic {credentials}"));
            }
        }
        AuthConfig::Header {
            header_name,
            header_value,
        } => {
            let name = header_name.as_deref().unwrap_or_default();
            let value = header_value.as_deref().unwrap_or_default();

            if !name.is_empty() && !value.is_empty() {
                headers.insert(name.to_string(), value.to_string());
            }
        }
        AuthConfig::Jwt { token } => {
            if let Some(token) = token.as_deref().filter(|t| !t.is_empty()) {
                headers.insert(AUTHORIZATION.to_string(), format!("Bearer {token}"));
            }
        }
    }

    headers
}
