//! The normalized unit of webhook output.

use serde::{Deserialize, Serialize};

use crate::media::MessageKind;

/// URI schemes that mark item content as already displayable.
const URI_PREFIXES: &[&str] = &["data:", "http://", "https://", "blob:"];

/// One unit of bot output, ready for display.
///
/// For [`MessageKind::Text`] the content is raw (markdown) text. For every
/// other kind it is either base64 that must be paired with `mime_type`, or
/// a URI supplied verbatim by the webhook. Content is never given a
/// `data:` prefix by this crate; use [`ResponseItem::data_uri`] for that.
///
/// On the wire the kind is the `type` field:
///
/// ```json
/// { "type": "image", "content": "QUJD", "mimeType": "image/png" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseItem {
    /// What the content represents
    #[serde(rename = "type")]
    pub kind: MessageKind,
    /// Raw text, base64 payload, or URI
    pub content: String,
    /// Original or synthesized file name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// MIME type of a binary payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl ResponseItem {
    /// Creates a text item.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Text,
            content: content.into(),
            file_name: None,
            mime_type: None,
        }
    }

    /// Creates an item of the given kind carrying base64 or URI content.
    #[must_use]
    pub fn media(kind: MessageKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            file_name: None,
            mime_type: None,
        }
    }

    /// Sets the file name.
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Sets the MIME type.
    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Returns true for text items.
    #[must_use]
    pub fn is_text(&self) -> bool {
        self.kind == MessageKind::Text
    }

    /// Returns true if the content is already a URI rather than base64.
    #[must_use]
    pub fn is_uri(&self) -> bool {
        URI_PREFIXES
            .iter()
            .any(|prefix| self.content.starts_with(prefix))
    }

    /// Returns a displayable URI for a binary item.
    ///
    /// Content that already is a URI is returned verbatim. Base64 content
    /// becomes `data:<mime>;base64,<content>`, with
    /// `application/octet-stream` when no MIME type is known.
    /// Text items have no URI form and yield `None`.
    #[must_use]
    pub fn data_uri(&self) -> Option<String> {
        if self.is_text() {
            return None;
        }
        if self.is_uri() {
            return Some(self.content.clone());
        }

        let mime = self
            .mime_type
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(crate::media::OCTET_STREAM);
        Some(format!("data:{mime};base64,{}", self.content))
    }
}
