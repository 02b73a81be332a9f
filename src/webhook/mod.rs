//! Webhook layer for exchanging chat turns with an external service.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`], [`MultipartForm`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Sending a chat turn and normalizing the reply ([`WebhookExchange`], [`classify_response`])

mod classify;
mod client;
mod error;
mod exchange;
mod multipart;
mod transport;

#[cfg(test)]
mod classify_tests;

pub use classify::{BodyClass, EXPECTED_SHAPES, classify_response};
pub use client::ReqwestClient;
pub use error::{ErrorKind, ExchangeError, HttpError};
pub use exchange::{
    CHAT_ID_FIELD, FILE_FIELD_PREFIX, TEXT_FIELD, WebhookExchange, build_request,
};
pub use multipart::{FormPart, MultipartForm, PartValue};
pub use transport::{HttpClient, HttpRequest, HttpResponse};
