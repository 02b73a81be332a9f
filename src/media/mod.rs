//! Media type inference shared by inbound and outbound messages.
//!
//! This module provides:
//! - Message kind inference from MIME types ([`MessageKind`])
//! - The static MIME type to file extension table ([`extension_for_mime`])
//! - File name resolution for binary replies ([`parse_content_disposition`], [`synthesize_file_name`])

mod filename;


use std::fmt;

use serde::{Deserialize, Serialize};

pub use filename::{parse_content_disposition, synthesize_file_name};

/// MIME type used when nothing better is known about a payload.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Extension used when a MIME type yields no usable extension.
pub const FALLBACK_EXTENSION: &str = "bin";

/// The kind of content a chat message carries.
///
/// Serialized in lowercase (`"text"`, `"image"`, ...) as it appears
/// in the `type` field of webhook reply items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Plain or markdown text
    Text,
    /// Image content
    Image,
    /// Audio content
    Audio,
    /// Video content
    Video,
    /// Any other file
    File,
}

impl MessageKind {
    /// Infers the kind of a binary payload from its MIME type.
    ///
    /// Only the top-level type matters: `image/*`, `video/*` and `audio/*`
    /// map to their kinds, everything else (including an empty string) is a file.
    /// Binary payloads are never classified as [`MessageKind::Text`].
    #[must_use]
    pub fn from_mime(mime: &str) -> Self {
        let essence = mime_essence(mime);
        if essence.starts_with("image/") {
            Self::Image
        } else if essence.starts_with("video/") {
            Self::Video
        } else if essence.starts_with("audio/") {
            Self::Audio
        } else {
            Self::File
        }
    }

    /// Parses a wire name, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for names that are not a known kind.
    #[must_use]
    pub fn from_wire(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "image" => Some(Self::Image),
            "audio" => Some(Self::Audio),
            "video" => Some(Self::Video),
            "file" => Some(Self::File),
            _ => None,
        }
    }

    /// Returns the lowercase wire name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Video => "video",
            Self::File => "file",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Known MIME types and the extension used when saving them.
const MIME_EXTENSIONS: &[(&str, &str)] = &[
    // Documents
    ("application/pdf", "pdf"),
    ("application/msword", "doc"),
    (
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "docx",
    ),
    ("application/vnd.ms-excel", "xls"),
    (
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "xlsx",
    ),
    ("application/vnd.ms-powerpoint", "ppt"),
    (
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "pptx",
    ),
    ("application/rtf", "rtf"),
    ("application/json", "json"),
    ("application/xml", "xml"),
    ("text/plain", "txt"),
    ("text/csv", "csv"),
    ("text/html", "html"),
    ("text/markdown", "md"),
    ("text/xml", "xml"),
    // Images
    ("image/png", "png"),
    ("image/jpeg", "jpg"),
    ("image/gif", "gif"),
    ("image/webp", "webp"),
    ("image/svg+xml", "svg"),
    ("image/bmp", "bmp"),
    ("image/tiff", "tiff"),
    ("image/x-icon", "ico"),
    ("image/vnd.microsoft.icon", "ico"),
    ("image/heic", "heic"),
    // Audio
    ("audio/mpeg", "mp3"),
    ("audio/wav", "wav"),
    ("audio/x-wav", "wav"),
    ("audio/ogg", "ogg"),
    ("audio/aac", "aac"),
    ("audio/flac", "flac"),
    ("audio/mp4", "m4a"),
    // Video
    ("video/mp4", "mp4"),
    ("video/webm", "webm"),
    ("audio/webm", "webm"),
    ("video/ogg", "ogv"),
    ("video/quicktime", "mov"),
    ("video/x-msvideo", "avi"),
    ("video/x-matroska", "mkv"),
    ("video/mpeg", "mpeg"),
    // Archives
    ("application/zip", "zip"),
    ("application/gzip", "gz"),
    ("application/x-tar", "tar"),
    ("application/x-7z-compressed", "7z"),
    ("application/x-rar-compressed", "rar"),
    (OCTET_STREAM, FALLBACK_EXTENSION),
];

/// Returns the MIME type without parameters, trimmed and lowercased.
///
/// `"Text/Plain; charset=utf-8"` becomes `"text/plain"`.
#[must_use]
pub fn mime_essence(mime: &str) -> String {
    mime.split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Returns the file extension to use for a payload of the given MIME type.
///
/// Resolution order:
/// 1. The static table of common document, image, audio, video and archive types
/// 2. The subtype token before any `+` suffix (`image/x-foo+xml` gives `x-foo`)
/// 3. [`FALLBACK_EXTENSION`] when the MIME type is empty or has no usable subtype
#[must_use]
pub fn extension_for_mime(mime: &str) -> String {
    let essence = mime_essence(mime);

    if let Some((_, ext)) = MIME_EXTENSIONS.iter().find(|(m, _)| *m == essence) {
        return (*ext).to_string();
    }

    let subtype = essence
        .split_once('/')
        .map(|(_, sub)| sub.split('+').next().unwrap_or_default().trim())
        .unwrap_or_default();

    let usable = !subtype.is_empty()
        && subtype
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.');

    if usable {
        subtype.to_string()
    } else {
        FALLBACK_EXTENSION.to_string()
    }
}
