//! Outbound attachments.

use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

use super::ResponseItem;
use crate::media::MessageKind;

/// Error type for loading attachments from disk.
#[derive(Debug, Error)]
pub enum AttachmentError {
    /// Failed to read the attachment file.
    #[error("Failed to read attachment '{}': {source}", path.display())]
    Read {
        /// Path to the attachment
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// A named binary payload sent along with a chat message.
///
/// The exchange treats attachments opaquely and posts them as multipart
/// file parts named by position (`file0`, `file1`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// File name reported to the webhook
    pub file_name: String,
    /// MIME type reported to the webhook
    pub mime_type: String,
    /// Raw file content
    pub data: Vec<u8>,
}

impl Attachment {
    /// Creates an attachment from in-memory data.
    #[must_use]
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            data,
        }
    }

    /// Reads an attachment from a file.
    ///
    /// The MIME type is inferred from the file extension; unknown
    /// extensions are sent as `application/octet-stream`.
    ///
    /// # Errors
    ///
    /// Returns [`AttachmentError::Read`] if the file cannot be read.
    pub fn from_path(path: &Path) -> Result<Self, AttachmentError> {
        let data = std::fs::read(path).map_err(|e| AttachmentError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file_name = path
            .file_name()
            .map_or_else(|| "file".to_string(), |n| n.to_string_lossy().into_owned());

        let mime_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .to_string();

        Ok(Self::new(file_name, mime_type, data))
    }

    /// Returns the message kind this attachment is displayed as.
    #[must_use]
    pub fn kind(&self) -> MessageKind {
        MessageKind::from_mime(&self.mime_type)
    }

    /// Builds the item shown locally for this attachment while the
    /// webhook reply is pending.
    #[must_use]
    pub fn echo(&self) -> ResponseItem {
        ResponseItem::media(self.kind(), STANDARD.encode(&self.data))
            .with_file_name(&self.file_name)
            .with_mime_type(&self.mime_type)
    }
}
