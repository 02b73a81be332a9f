//! File name resolution for binary webhook replies.

use std::time::SystemTime;

use chrono::{DateTime, Utc};

use super::extension_for_mime;

/// Extracts the file name from a `Content-Disposition` header value.
///
/// Only the `attachment` disposition is considered. The RFC 5987
/// `filename*=charset''value` form takes precedence over a plain
/// `filename=` parameter. Quotes are stripped and the value is
/// percent-decoded; a value that fails to decode is kept as-is.
///
/// Returns `None` when the header is not an attachment, carries no
/// file name, or the file name is empty.
///
/// # Example
///
/// ```
/// use hookchat::media::parse_content_disposition;
///
/// let name = parse_content_disposition(r#"attachment; filename="report%20q1.pdf""#);
/// assert_eq!(name.as_deref(), Some("report q1.pdf"));
/// ```
#[must_use]
pub fn parse_content_disposition(header: &str) -> Option<String> {
    let mut params = split_params(header).into_iter();

    let disposition = params.next()?;
    if !disposition.eq_ignore_ascii_case("attachment") {
        return None;
    }

    let mut plain = None;
    let mut extended = None;

    for param in params {
        let Some((key, value)) = param.split_once('=') else {
            continue;
        };
        match key.trim().to_ascii_lowercase().as_str() {
            "filename*" => extended = Some(value.trim()),
            "filename" => plain = Some(value.trim()),
            _ => {}
        }
    }

    let raw = extended
        .map(|value| value.split_once("''").map_or(value, |(_, name)| name))
        .or(plain)?;

    let unquoted = raw.replace(['"', '\''], "");
    let decoded = urlencoding::decode(&unquoted).map_or(unquoted.clone(), |name| name.into_owned());

    let name = decoded.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Builds a file name for a binary reply that arrived without one.
///
/// The name has the form `file-<timestamp>.<ext>`, where the timestamp is
/// the UTC time at seconds precision with `:` replaced so it is safe on
/// every filesystem, and `ext` comes from [`extension_for_mime`].
///
/// # Example
///
/// ```
/// use hookchat::media::synthesize_file_name;
/// use std::time::{Duration, SystemTime};
///
/// let at = SystemTime::UNIX_EPOCH + Duration::from_secs(86_400);
/// assert_eq!(
///     synthesize_file_name("application/pdf", at),
///     "file-1970-01-02T00-00-00Z.pdf"
/// );
/// ```
#[must_use]
pub fn synthesize_file_name(mime: &str, now: SystemTime) -> String {
    let timestamp = DateTime::<Utc>::from(now).format("%Y-%m-%dT%H-%M-%SZ");
    format!("file-{timestamp}.{}", extension_for_mime(mime))
}

/// Splits a header value on `;`, ignoring separators inside double quotes.
fn split_params(header: &str) -> Vec<&str> {
    let mut params = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (idx, ch) in header.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => {
                params.push(header[start..idx].trim());
                start = idx + 1;
            }
            _ => {}
        }
    }
    params.push(header[start..].trim());

    params.retain(|p| !p.is_empty());
    params
}
