//! Email query functions

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{MailError, MailResult};
use crate::models::{Email, EmailFilter, EmailId};
use crate::storage::EmailStore;

/// Result of listing a folder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailListing {
    /// Emails that passed the filter, in collection order
    pub emails: Vec<Email>,
    /// Number of emails that passed the filter
    pub total: usize,
    /// Unread emails across the whole mailbox, ignoring the filter
    pub unread_count: usize,
}

/// List emails in a folder
///
/// There is only one mailbox, so `folder` is recorded but does not narrow
/// the result. `unread_count` is always computed over every email.
///
/// # Arguments
/// * `store` - The storage backend
/// * `folder` - Folder name from the request
/// * `filter` - Which emails to keep
pub fn list_emails(
    store: &dyn EmailStore,
    folder: &str,
    filter: EmailFilter,
) -> MailResult<EmailListing> {
    let all = store.list_emails()?;
    let unread_count = all.iter().filter(|e| !e.read).count();

    let emails: Vec<Email> = match filter {
        EmailFilter::All => all,
        EmailFilter::Unread => all.into_iter().filter(|e| !e.read).collect(),
        EmailFilter::Starred => Vec::new(),
    };

    debug!(
        "Listed {} emails (folder={}, filter={})",
        emails.len(),
        folder,
        filter.as_str()
    );

    Ok(EmailListing {
        total: emails.len(),
        emails,
        unread_count,
    })
}

/// Get a single email by ID
pub fn get_email(store: &dyn EmailStore, id: &EmailId) -> MailResult<Email> {
    let email = store.get_email(id)?;
    debug!(
        "Lookup of email {}: {}",
        id,
        if email.is_some() { "found" } else { "missing" }
    );
    email.ok_or_else(|| MailError::not_found("Email"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryEmailStore;

    #[test]
    fn test_list_all() {
        let store = InMemoryEmailStore::seeded().unwrap();
        let listing = list_emails(&store, "inbox", EmailFilter::All).unwrap();
        assert_eq!(listing.total, 3);
        assert_eq!(listing.emails.len(), 3);
        assert_eq!(listing.unread_count, 2);
    }

    #[test]
    fn test_list_unread_only() {
        let store = InMemoryEmailStore::seeded().unwrap();
        let listing = list_emails(&store, "inbox", EmailFilter::Unread).unwrap();
        assert_eq!(listing.total, 2);
        assert!(listing.emails.iter().all(|e| !e.read));
        let ids: Vec<u64> = listing.emails.iter().map(|e| e.id.get()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_list_starred_is_empty_but_counts_unread() {
        let store = InMemoryEmailStore::seeded().unwrap();
        let listing = list_emails(&store, "inbox", EmailFilter::Starred).unwrap();
        assert_eq!(listing.total, 0);
        assert!(listing.emails.is_empty());
        assert_eq!(listing.unread_count, 2);
    }

    #[test]
    fn test_folder_does_not_narrow() {
        let store = InMemoryEmailStore::seeded().unwrap();
        let listing = list_emails(&store, "archive", EmailFilter::All).unwrap();
        assert_eq!(listing.total, 3);
    }

    #[test]
    fn test_get_email_returns_requested_id() {
        let store = InMemoryEmailStore::seeded().unwrap();
        for id in 1..=3 {
            let email = get_email(&store, &EmailId::new(id)).unwrap();
            assert_eq!(email.id.get(), id);
        }
    }

    #[test]
    fn test_get_missing_email() {
        let store = InMemoryEmailStore::seeded().unwrap();
        let err = get_email(&store, &EmailId::new(42)).unwrap_err();
        assert!(matches!(err, MailError::NotFound { .. }));
        assert_eq!(err.to_string(), "Email not found");
    }
}
