//! Storage trait definitions

use crate::models::{Email, EmailId};
use anyhow::Result;

/// Trait for email storage operations
///
/// The store owns an ordered collection. Order is significant: listings
/// return emails in collection order, and new mail is placed at the front.
pub trait EmailStore: Send + Sync {
    /// Get an email by ID
    fn get_email(&self, id: &EmailId) -> Result<Option<Email>>;

    /// Check if an email exists
    fn has_email(&self, id: &EmailId) -> Result<bool>;

    /// List all emails in collection order
    fn list_emails(&self) -> Result<Vec<Email>>;

    /// Insert an email at the front of the collection
    fn prepend_email(&self, email: Email) -> Result<()>;

    /// Insert an email at the back of the collection
    fn append_email(&self, email: Email) -> Result<()>;

    /// Set the read flag on an email
    ///
    /// Returns false if no email has the given ID.
    fn set_read(&self, id: &EmailId, read: bool) -> Result<bool>;

    /// Reserve a fresh ID that no stored or future email will share
    fn allocate_id(&self) -> Result<EmailId>;

    /// Count all emails
    fn count_emails(&self) -> Result<usize>;

    /// Count emails that have not been read
    fn count_unread(&self) -> Result<usize>;

    /// Clear all data (for testing)
    fn clear(&self) -> Result<()>;
}
