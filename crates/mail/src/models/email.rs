//! Email model representing a single mailbox entry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of characters kept in a derived preview
pub const PREVIEW_LEN: usize = 70;

/// Display name used as the sender of outgoing mail
pub const OUTGOING_SENDER: &str = "You";

/// Display time given to freshly sent mail
pub const OUTGOING_TIME: &str = "Now";

/// Unique identifier for an email
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailId(pub u64);

impl EmailId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for EmailId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for EmailId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single email in the mailbox
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Email {
    /// Store-assigned identifier
    pub id: EmailId,
    /// Sender display name
    pub sender: String,
    /// Subject line
    pub subject: String,
    /// Short preview shown in listings
    pub preview: String,
    /// Full body text
    pub content: String,
    /// Human-readable display time (e.g. "2:30 PM")
    pub time: String,
    /// Whether the email has been read
    pub read: bool,
    /// Creation time
    pub timestamp: DateTime<Utc>,
    /// Recipient, set on outgoing mail only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl Email {
    /// Create a new email builder
    pub fn builder(id: EmailId) -> EmailBuilder {
        EmailBuilder::new(id)
    }

    /// Build an outgoing email as it looks right after sending
    pub fn outgoing(
        id: EmailId,
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self::builder(id)
            .sender(OUTGOING_SENDER)
            .to(to)
            .subject(subject)
            .body(body)
            .time(OUTGOING_TIME)
            .read(true)
            .build()
    }

    /// Whether `needle` (already lower-cased) occurs in the subject, sender or content
    pub fn matches(&self, needle: &str) -> bool {
        self.subject.to_lowercase().contains(needle)
            || self.sender.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
    }
}

/// Derive a listing preview from a body.
///
/// Bodies longer than [`PREVIEW_LEN`] characters are cut and suffixed with `...`.
pub fn make_preview(body: &str) -> String {
    match body.char_indices().nth(PREVIEW_LEN) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

/// Builder for creating Email instances
pub struct EmailBuilder {
    id: EmailId,
    sender: String,
    subject: String,
    preview: Option<String>,
    content: String,
    time: String,
    read: bool,
    timestamp: Option<DateTime<Utc>>,
    to: Option<String>,
}

impl EmailBuilder {
    pub fn new(id: EmailId) -> Self {
        Self {
            id,
            sender: String::new(),
            subject: String::new(),
            preview: None,
            content: String::new(),
            time: String::new(),
            read: false,
            timestamp: None,
            to: None,
        }
    }

    pub fn sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = sender.into();
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Set the full body. The preview is derived from it unless set explicitly.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.content = body.into();
        self
    }

    /// Override the derived preview
    pub fn preview(mut self, preview: impl Into<String>) -> Self {
        self.preview = Some(preview.into());
        self
    }

    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    pub fn read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    pub fn build(self) -> Email {
        let preview = self.preview.unwrap_or_else(|| make_preview(&self.content));
        Email {
            id: self.id,
            sender: self.sender,
            subject: self.subject,
            preview,
            content: self.content,
            time: self.time,
            read: self.read,
            timestamp: self.timestamp.unwrap_or_else(Utc::now),
            to: self.to,
        }
    }
}
