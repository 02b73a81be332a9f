//! Normalization of webhook responses into reply items.
//!
//! Webhook authors return whatever is convenient: a JSON envelope, a bare
//! JSON array, a plain string, or a raw file. [`classify_response`] checks
//! the supported shapes in order and returns the first match.

use std::time::SystemTime;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use super::{ExchangeError, HttpResponse};
use crate::media::{self, MessageKind};
use crate::message::ResponseItem;

/// Message listing the JSON shapes a webhook may return.
pub const EXPECTED_SHAPES: &str = "expected an object with a 'text' string, an object with a \
     'responses' array, or an array of response items";

/// How a response body is interpreted, based on its declared content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyClass {
    /// `application/json` or any `+json` type
    Json,
    /// Any `text/*` type
    Text,
    /// Everything else, including a missing content type
    Binary,
}

impl BodyClass {
    /// Classifies a MIME essence (lowercase, without parameters).
    #[must_use]
    pub fn of(essence: &str) -> Self {
        if essence == "application/json" || essence.ends_with("+json") {
            Self::Json
        } else if essence.starts_with("text/") {
            Self::Text
        } else {
            Self::Binary
        }
    }
}

/// Converts a webhook response into an ordered list of reply items.
///
/// `now` is used to name binary replies that arrive without a file name.
/// An empty list is a valid outcome: the webhook chose not to reply.
///
/// # Errors
///
/// - [`ExchangeError::Http`] if the status is not 2xx
/// - [`ExchangeError::MalformedResponse`] if the body is JSON of an
///   unrecognized shape
///
/// A JSON or text body that does not parse as JSON is not an error; it
/// becomes a single text item.
pub fn classify_response(
    response: &HttpResponse,
    now: SystemTime,
) -> Result<Vec<ResponseItem>, ExchangeError> {
    if !response.is_success() {
        return Err(ExchangeError::Http {
            status: response.status,
            body: String::from_utf8_lossy(&response.body).into_owned(),
        });
    }

    let essence = response
        .content_type()
        .map(media::mime_essence)
        .unwrap_or_default();

    match BodyClass::of(&essence) {
        BodyClass::Binary => Ok(classify_binary(response, &essence, now)),
        BodyClass::Json | BodyClass::Text => classify_text(&String::from_utf8_lossy(&response.body)),
    }
}

/// Wraps a raw body as a single file-like item.
fn classify_binary(response: &HttpResponse, essence: &str, now: SystemTime) -> Vec<ResponseItem> {
    if response.body.is_empty() {
        tracing::debug!("Binary response has an empty body, nothing to display");
        return Vec::new();
    }

    let mime_type = if essence.is_empty() {
        media::OCTET_STREAM
    } else {
        essence
    };

    let file_name = response
        .header(http::header::CONTENT_DISPOSITION)
        .and_then(media::parse_content_disposition)
        .unwrap_or_else(|| media::synthesize_file_name(mime_type, now));

    let kind = MessageKind::from_mime(mime_type);
    tracing::debug!(
        "Binary response: {kind} '{file_name}' ({} bytes)",
        response.body.len()
    );

    vec![
        ResponseItem::media(kind, STANDARD.encode(&response.body))
            .with_file_name(file_name)
            .with_mime_type(mime_type),
    ]
}

/// Interprets a JSON or text body.
fn classify_text(body: &str) -> Result<Vec<ResponseItem>, ExchangeError> {
    if body.trim().is_empty() {
        tracing::debug!("Response body is empty, nothing to display");
        return Ok(Vec::new());
    }

    match serde_json::from_str::<Value>(body) {
        Ok(value) => classify_json(value),
        Err(e) => {
            tracing::debug!("Response is not JSON ({e}), treating it as plain text");
            Ok(vec![ResponseItem::text(body)])
        }
    }
}

/// Matches a parsed JSON value against the recognized reply shapes.
fn classify_json(value: Value) -> Result<Vec<ResponseItem>, ExchangeError> {
    match value {
        Value::Object(mut object) => {
            if let Some(Value::Array(items)) = object.remove("responses") {
                return Ok(parse_items(items));
            }
            if let Some(Value::String(text)) = object.remove("text") {
                return Ok(vec![ResponseItem::text(text)]);
            }
            Err(ExchangeError::MalformedResponse(EXPECTED_SHAPES.to_string()))
        }
        Value::Array(items) => Ok(parse_items(items)),
        _ => Err(ExchangeError::MalformedResponse(EXPECTED_SHAPES.to_string())),
    }
}

/// Converts the elements of a recognized reply array into items.
///
/// Elements are read leniently so one odd entry never hides the others:
/// - objects become items; `type` is matched case-insensitively and an
///   unknown or missing kind is treated as a file, a missing `content` is empty
/// - strings become text items
/// - anything else is skipped
fn parse_items(items: Vec<Value>) -> Vec<ResponseItem> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match value {
            Value::Object(object) => Some(item_from_object(&object)),
            Value::String(text) => Some(ResponseItem::text(text)),
            other => {
                tracing::warn!("Skipping reply item {index}: expected an object, got {other}");
                None
            }
        })
        .collect()
}

fn item_from_object(object: &serde_json::Map<String, Value>) -> ResponseItem {
    let string_field = |key: &str| object.get(key).and_then(Value::as_str).map(str::to_string);

    let kind = match object.get("type") {
        Some(Value::String(name)) => MessageKind::from_wire(name).unwrap_or_else(|| {
            tracing::debug!("Unknown reply item type '{name}', treating it as a file");
            MessageKind::File
        }),
        _ => MessageKind::File,
    };

    let item = ResponseItem::media(kind, string_field("content").unwrap_or_default());
    let item = match string_field("fileName") {
        Some(name) => item.with_file_name(name),
        None => item,
    };
    match string_field("mimeType") {
        Some(mime) => item.with_mime_type(mime),
        None => item,
    }
}
