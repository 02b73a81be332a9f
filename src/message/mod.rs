//! Chat message types exchanged with the webhook.
//!
//! This module provides:
//! - Normalized reply items ([`ResponseItem`])
//! - Outbound attachments and their local echoes ([`Attachment`])

mod attachment;
mod item;


pub use crate::media::MessageKind;
pub use attachment::{Attachment, AttachmentError};
pub use item::ResponseItem;
