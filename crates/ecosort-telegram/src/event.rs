//! Transport-independent inbound and outbound event types.
//!
//! The stage machine consumes [`InboundEvent`]s and produces [`Reply`]s; the
//! Telegram handlers translate between these and teloxide types. Keeping the
//! types transport-free lets the whole machine run in tests without a bot
//! token.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

/// One inbound message from the event source.
#[derive(Debug, Clone)]
pub struct InboundEvent {
    /// Stable user identifier (Telegram chat id).
    pub user_id: i64,
    /// Username, when the transport provides one.
    pub username: Option<String>,
    /// Message text.
    pub text: String,
    /// When the message was sent.
    pub timestamp: DateTime<Utc>,
}

impl InboundEvent {
    /// Create an event with the current timestamp.
    pub fn new(user_id: i64, username: Option<String>, text: impl Into<String>) -> Self {
        Self {
            user_id,
            username,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// Username for the flat-file records, with the registry's fallback.
    pub fn username_or_anonymous(&self) -> &str {
        self.username.as_deref().unwrap_or("Anonymous")
    }
}

/// One outbound reply for the transport to deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Plain text message.
    Text(String),
    /// Image with a caption; the transport degrades to caption-only text
    /// when the file is missing.
    Photo { path: PathBuf, caption: String },
}

impl Reply {
    /// Create a text reply.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Create a photo reply.
    pub fn photo(path: impl Into<PathBuf>, caption: impl Into<String>) -> Self {
        Self::Photo {
            path: path.into(),
            caption: caption.into(),
        }
    }

    /// The textual content of the reply (caption for photos).
    pub fn content(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Photo { caption, .. } => caption,
        }
    }
}
