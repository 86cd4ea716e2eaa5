//! Action handler for email operations
//!
//! Mutations on the mailbox: marking read, sending and replying.
//! Nothing leaves the process; "sending" only records the email locally.

use log::info;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{MailError, MailResult};
use crate::models::{Email, EmailId};
use crate::storage::EmailStore;

/// Prefix added to the subject of a reply
pub const REPLY_PREFIX: &str = "Re: ";

/// Fields of a new outgoing email
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SendRequest {
    pub to: Option<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
}

/// Fields of a reply to an existing email
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplyRequest {
    pub body: Option<String>,
}

/// Treat an empty string the same as a missing field
fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Handler for email actions like send, reply and mark-read
///
/// New mail is placed at the front of the store so it lists first.
pub struct ActionHandler {
    store: Arc<dyn EmailStore>,
}

impl ActionHandler {
    /// Create a new action handler
    pub fn new(store: Arc<dyn EmailStore>) -> Self {
        Self { store }
    }

    /// Mark an email as read
    ///
    /// Idempotent: marking an already-read email succeeds.
    pub fn mark_read(&self, id: &EmailId) -> MailResult<()> {
        if !self.store.set_read(id, true)? {
            return Err(MailError::not_found("Email"));
        }
        info!("Marked email {} as read", id);
        Ok(())
    }

    /// Send a new email
    ///
    /// `to` and `subject` are required; the body defaults to empty.
    pub fn send_email(&self, request: &SendRequest) -> MailResult<Email> {
        let (Some(to), Some(subject)) = (non_empty(&request.to), non_empty(&request.subject))
        else {
            return Err(MailError::invalid("Missing required fields"));
        };
        let body = request.body.as_deref().unwrap_or_default();

        let email = Email::outgoing(self.store.allocate_id()?, to, subject, body);
        self.store.prepend_email(email.clone())?;

        info!("Sent email {} to {}", email.id, to);
        Ok(email)
    }

    /// Reply to an existing email
    ///
    /// The original must exist (checked before the body). The reply goes to
    /// the original sender with the subject prefixed by [`REPLY_PREFIX`].
    pub fn reply_to_email(&self, id: &EmailId, request: &ReplyRequest) -> MailResult<Email> {
        let original = self
            .store
            .get_email(id)?
            .ok_or_else(|| MailError::not_found("Original email"))?;

        let Some(body) = non_empty(&request.body) else {
            return Err(MailError::invalid("Reply body is required"));
        };

        let subject = format!("{}{}", REPLY_PREFIX, original.subject);
        let email = Email::outgoing(self.store.allocate_id()?, &original.sender, subject, body);
        self.store.prepend_email(email.clone())?;

        info!("Sent reply {} to email {}", email.id, id);
        Ok(email)
    }
}
