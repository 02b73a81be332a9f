//! hookchat: a chat client for webhook-backed bots
//!
//! A library for exchanging chat turns with an HTTP webhook: encoding
//! credentials, posting text and attachments as multipart forms, and
//! normalizing whatever the webhook replies into a list of displayable items.

pub mod auth;
pub mod config;
pub mod media;
pub mod message;
pub mod time;
pub mod webhook;
