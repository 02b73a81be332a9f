//! One chat turn against the webhook: build the request, send it, classify the reply.

use http::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

use super::{ExchangeError, HttpClient, HttpRequest, MultipartForm, classify_response};
use crate::auth::{self, AuthConfig, AuthHeaders};
use crate::message::{Attachment, ResponseItem};
use crate::time::{Clock, SystemClock};

/// Form field carrying the message text.
pub const TEXT_FIELD: &str = "text";

/// Form field carrying the session identifier.
pub const CHAT_ID_FIELD: &str = "chatId";

/// Prefix of the positional attachment fields (`file0`, `file1`, ...).
pub const FILE_FIELD_PREFIX: &str = "file";

/// Sends chat turns to a webhook and normalizes the replies.
///
/// The exchange holds no per-call state: the endpoint and credentials are
/// passed to every [`send`](Self::send), and concurrent calls are independent.
/// Nothing is retried and no timeout is added beyond the client's own.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation
/// - `C`: The clock used to name unnamed binary replies (defaults to [`SystemClock`])
///
/// # Example
///
/// ```no_run
/// use hookchat::auth::AuthConfig;
/// use hookchat::webhook::{ReqwestClient, WebhookExchange};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let exchange = WebhookExchange::new(ReqwestClient::new());
/// let endpoint = Url::parse("https://hooks.example.com/chat")?;
/// let items = exchange
///     .send(&endpoint, "hello", &[], &AuthConfig::None, "session-1")
///     .await?;
/// for item in items {
///     println!("{}: {}", item.kind, item.content);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct WebhookExchange<H, C = SystemClock> {
    client: H,
    clock: C,
}

impl<H> WebhookExchange<H, SystemClock> {
    /// Creates an exchange using the system clock.
    #[must_use]
    pub const fn new(client: H) -> Self {
        Self {
            client,
            clock: SystemClock,
        }
    }
}

impl<H, C> WebhookExchange<H, C> {
    /// Sets a custom clock.
    ///
    /// This is primarily useful for testing synthesized file names.
    #[must_use]
    pub fn with_clock<C2>(self, clock: C2) -> WebhookExchange<H, C2> {
        WebhookExchange {
            client: self.client,
            clock,
        }
    }
}

/// Builds the outbound request for one chat turn.
///
/// The body is a multipart form with the fields `text`, `chatId`, then
/// `file0..fileN` in attachment order. Authentication headers are added;
/// `Content-Type` is left to the client so it can choose the boundary.
#[must_use]
pub fn build_request(
    endpoint: &Url,
    text: &str,
    attachments: &[Attachment],
    auth: &AuthConfig,
    session_id: &str,
) -> HttpRequest {
    let form = attachments.iter().enumerate().fold(
        MultipartForm::new()
            .text(TEXT_FIELD, text)
            .text(CHAT_ID_FIELD, session_id),
        |form, (index, attachment)| {
            form.file(
                format!("{FILE_FIELD_PREFIX}{index}"),
                attachment.file_name.clone(),
                attachment.mime_type.clone(),
                attachment.data.clone(),
            )
        },
    );

    let mut request = HttpRequest::post(endpoint.clone()).with_form(form);
    apply_auth_headers(&mut request.headers, &auth::encode(auth));
    request
}

/// Merges auth headers into a header map.
///
/// Entries that are not valid HTTP header names or values are skipped:
/// malformed credentials never fail a request.
fn apply_auth_headers(headers: &mut HeaderMap, auth_headers: &AuthHeaders) {
    for (name, value) in auth_headers {
        let parsed = HeaderName::from_bytes(name.as_bytes())
            .ok()
            .zip(HeaderValue::from_str(value).ok());

        match parsed {
            Some((name, value)) => {
                headers.insert(name, value);
            }
            None => tracing::warn!("Skipping auth header '{name}': not a valid HTTP header"),
        }
    }
}

impl<H: HttpClient, C: Clock> WebhookExchange<H, C> {
    /// Sends one chat turn and returns the normalized reply.
    ///
    /// `session_id` is sent as `chatId` so the webhook can correlate the text
    /// and attachments of this turn; callers should generate a fresh one per turn.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::Network`] if no response was obtained
    /// - [`ExchangeError::Http`] if the webhook returned a non-2xx status
    /// - [`ExchangeError::MalformedResponse`] if the reply is JSON of an
    ///   unrecognized shape
    pub async fn send(
        &self,
        endpoint: &Url,
        text: &str,
        attachments: &[Attachment],
        auth: &AuthConfig,
        session_id: &str,
    ) -> Result<Vec<ResponseItem>, ExchangeError> {
        let request = build_request(endpoint, text, attachments, auth, session_id);

        tracing::debug!(
            "Posting chat turn {session_id} to {endpoint} ({} attachment(s), auth: {})",
            attachments.len(),
            auth.scheme()
        );

        let response = self.client.request(request).await?;

        tracing::debug!(
            "Webhook responded with {} ({} bytes)",
            response.status,
            response.body.len()
        );

        classify_response(&response, self.clock.now())
    }
}
