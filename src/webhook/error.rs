//! Error types for HTTP operations and webhook exchanges.

use std::fmt;

use thiserror::Error;

/// Error type for HTTP operations.
///
/// Describes why no response could be obtained from the server.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The server did not respond within the client's configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Classification of a failed exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No response was obtained from the webhook
    Network,
    /// The webhook answered with a non-2xx status
    Http,
    /// The webhook answered with JSON of an unrecognized shape
    MalformedResponse,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Network => "NetworkError",
            Self::Http => "HttpError",
            Self::MalformedResponse => "MalformedResponse",
        })
    }
}

/// Error type for a webhook exchange.
///
/// None of these are retried; the message is meant for the user.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// The request never produced a response.
    #[error("Network error: could not reach the webhook ({0})")]
    Network(#[from] HttpError),

    /// The webhook responded with a non-success status.
    ///
    /// The message shows the numeric status, the standard reason phrase
    /// for that code (not the server's own status line) and the body.
    #[error("{}", http_error_message(.status, .body))]
    Http {
        /// Response status
        status: http::StatusCode,
        /// Response body text (empty if unreadable)
        body: String,
    },

    /// The webhook returned JSON in none of the recognized shapes.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl ExchangeError {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) => ErrorKind::Network,
            Self::Http { .. } => ErrorKind::Http,
            Self::MalformedResponse(_) => ErrorKind::MalformedResponse,
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)] // called with field references
fn http_error_message(status: &http::StatusCode, body: &str) -> String {
    let mut message = format!("HTTP error {}", status.as_u16());
    if let Some(reason) = status.canonical_reason() {
        message.push(' ');
        message.push_str(reason);
    }

    let body = body.trim();
    if !body.is_empty() {
        message.push_str(": ");
        message.push_str(body);
    }
    message
}
