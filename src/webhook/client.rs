//! Production HTTP client implementation using reqwest.

use http::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use mime_guess::mime::Mime;
use reqwest::multipart::{Form, Part};

use super::{HttpClient, HttpError, HttpRequest, HttpResponse, MultipartForm, PartValue};

/// Production HTTP client using reqwest.
///
/// This is a thin wrapper around `reqwest::Client` that implements
/// the [`HttpClient`] trait. [`ReqwestClient::new`] imposes no request
/// timeout: a webhook that never answers keeps the call pending.
///
/// # Example
///
/// ```no_run
/// use hookchat::webhook::{HttpClient, HttpRequest, MultipartForm, ReqwestClient};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new();
/// let url = Url::parse("https://hooks.example.com/chat")?;
/// let request = HttpRequest::post(url).with_form(MultipartForm::new().text("text", "hello"));
/// let response = client.request(request).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new HTTP client with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Creates an HTTP client from an existing reqwest client.
    ///
    /// Useful when you need custom configuration (timeouts, TLS, etc.).
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts a transport-independent form into a reqwest form.
///
/// A file part whose MIME type cannot be parsed is sent without a `Content-Type`.
fn to_reqwest_form(form: MultipartForm) -> Form {
    let mut out = Form::new();

    for part in form.into_parts() {
        out = match part.value {
            PartValue::Text(value) => out.text(part.name, value),
            PartValue::File {
                file_name,
                mime_type,
                data,
            } => out.part(part.name, file_part(file_name, &mime_type, data)),
        };
    }

    out
}

fn file_part(file_name: String, mime_type: &str, data: Vec<u8>) -> Part {
    let part = Part::bytes(data).file_name(file_name);

    let content_type = mime_type
        .parse::<Mime>()
        .map_err(|e| e.to_string())
        .and_then(|mime| HeaderValue::from_str(mime.as_ref()).map_err(|e| e.to_string()));

    match content_type {
        Ok(value) => part.headers(HeaderMap::from_iter([(CONTENT_TYPE, value)])),
        Err(e) => {
            tracing::warn!("Ignoring invalid attachment MIME type '{mime_type}': {e}");
            part
        }
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        // Build the reqwest request
        let mut builder = self.inner.request(req.method, req.url.as_str());

        // Add headers
        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        // Multipart sets its own Content-Type with boundary
        if let Some(form) = req.body {
            builder = builder.multipart(to_reqwest_form(form));
        }

        // Send the request
        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else if e.is_builder() {
                HttpError::InvalidUrl(e.to_string())
            } else {
                HttpError::Connection(Box::new(e))
            }
        })?;

        // Extract response parts
        let status = response.status();
        let headers = response.headers().clone();

        // An unreadable body must not mask a failed status
        let body = match response.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) if !status.is_success() => {
                tracing::debug!("Discarding unreadable body of {status} response: {e}");
                Vec::new()
            }
            Err(e) => return Err(HttpError::Connection(Box::new(e))),
        };

        Ok(HttpResponse::new(status, headers, body))
    }
}
