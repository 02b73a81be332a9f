//! Application execution logic.
//!
//! This module sends one chat turn to the webhook and presents the
//! normalized reply: text on stdout, media saved to the output directory.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;
use uuid::Uuid;

use hookchat::config::{SendArgs, ValidatedConfig};
use hookchat::media::synthesize_file_name;
use hookchat::message::{Attachment, AttachmentError, ResponseItem};
use hookchat::time::{Clock, SystemClock};
use hookchat::webhook::{ExchangeError, ReqwestClient, WebhookExchange};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// An attachment could not be loaded.
    #[error(transparent)]
    Attachment(#[from] AttachmentError),

    /// The webhook exchange failed.
    #[error(transparent)]
    Exchange(#[from] ExchangeError),

    /// Failed to serialize the reply as JSON.
    #[error("Failed to serialize reply: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A media item carried content that is not valid base64.
    #[error("Reply item '{name}' is not valid base64: {source}")]
    Decode {
        /// File name the item would have been saved as
        name: String,
        /// Underlying decode error
        #[source]
        source: base64::DecodeError,
    },

    /// Failed to save a media item.
    #[error("Failed to save '{}': {source}", path.display())]
    Save {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to write to standard output.
    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),
}

/// Sends the chat turn described by `args` and presents the reply.
///
/// # Errors
///
/// Returns an error if:
/// - An attachment cannot be read
/// - The webhook exchange fails (network, HTTP status, malformed reply)
/// - A media reply cannot be decoded or saved
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig, args: SendArgs) -> Result<(), RunError> {
    let attachments = load_attachments(&args.files)?;
    let session_id = args
        .session_id
        .clone()
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    for attachment in &attachments {
        tracing::info!("Attaching {}", describe_attachment(attachment));
    }

    let exchange = WebhookExchange::new(ReqwestClient::new());
    let items = exchange
        .send(&config.url, &args.text, &attachments, &config.auth, &session_id)
        .await?;

    tracing::debug!("Received {} reply item(s)", items.len());
    if items.is_empty() {
        tracing::info!("Webhook returned no messages");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.json {
        write_json(&items, &mut out)
    } else {
        present(&items, &mut out, &config.output_dir, &SystemClock)
    }
}

/// Reads every attachment path, failing on the first unreadable file.
fn load_attachments(paths: &[PathBuf]) -> Result<Vec<Attachment>, AttachmentError> {
    paths.iter().map(|path| Attachment::from_path(path)).collect()
}

/// One-line summary of an attachment for the log, e.g. `image a.png (image/png, 3 bytes)`.
fn describe_attachment(attachment: &Attachment) -> String {
    format!(
        "{} {} ({}, {} bytes)",
        attachment.kind(),
        attachment.file_name,
        attachment.mime_type,
        attachment.data.len()
    )
}

/// Writes the reply items as a pretty-printed JSON array.
fn write_json<W: Write>(items: &[ResponseItem], out: &mut W) -> Result<(), RunError> {
    let json = serde_json::to_string_pretty(items)?;
    writeln!(out, "{json}").map_err(RunError::Output)
}

/// Presents reply items in order.
///
/// Text is written verbatim. URI content is written as a tagged line.
/// Base64 content is decoded and saved under `output_dir`.
fn present<W: Write>(
    items: &[ResponseItem],
    out: &mut W,
    output_dir: &Path,
    clock: &impl Clock,
) -> Result<(), RunError> {
    for item in items {
        if item.is_text() {
            writeln!(out, "{}", item.content).map_err(RunError::Output)?;
        } else if item.is_uri() {
            writeln!(out, "[{}] {}", item.kind, item.content).map_err(RunError::Output)?;
        } else {
            let path = save_media(item, output_dir, clock)?;
            writeln!(out, "[{}] saved to {}", item.kind, path.display())
                .map_err(RunError::Output)?;
        }
    }
    Ok(())
}

/// Decodes a base64 item and writes it to `output_dir`.
fn save_media(
    item: &ResponseItem,
    output_dir: &Path,
    clock: &impl Clock,
) -> Result<PathBuf, RunError> {
    let name = item
        .file_name
        .as_deref()
        .and_then(safe_file_name)
        .unwrap_or_else(|| {
            let mime = item
                .mime_type
                .as_deref()
                .unwrap_or(hookchat::media::OCTET_STREAM);
            synthesize_file_name(mime, clock.now())
        });

    let data = STANDARD
        .decode(item.content.trim())
        .map_err(|source| RunError::Decode {
            name: name.clone(),
            source,
        })?;

    let path = output_dir.join(&name);
    std::fs::write(&path, data).map_err(|source| RunError::Save {
        path: path.clone(),
        source,
    })?;

    tracing::debug!("Saved {} reply to {}", item.kind, path.display());
    Ok(path)
}

/// Reduces a server-supplied name to its final path component.
///
/// Returns `None` if nothing usable remains (e.g. `..` or an empty name).
fn safe_file_name(name: &str) -> Option<String> {
    let normalized = name.replace('\\', "/");
    Path::new(&normalized)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.trim().is_empty())
}
