//! Mailbox search
//!
//! Case-insensitive substring search over subject, sender and content.
//! There is no ranking: matches come back in collection order.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::MailResult;
use crate::models::Email;
use crate::storage::EmailStore;

/// Emails matching a search query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    /// Matching emails, in collection order
    pub emails: Vec<Email>,
    /// Number of matches
    pub total: usize,
    /// The normalized (lower-cased) query that was run
    pub query: String,
}

/// Search emails by free text
///
/// An empty query matches nothing rather than everything.
///
/// # Example
/// ```ignore
/// let results = search_emails(&store, "Baint")?;
/// assert_eq!(results.query, "baint");
/// ```
pub fn search_emails(store: &dyn EmailStore, query: &str) -> MailResult<SearchResults> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return Ok(SearchResults {
            emails: Vec::new(),
            total: 0,
            query: needle,
        });
    }

    let emails: Vec<Email> = store
        .list_emails()?
        .into_iter()
        .filter(|e| e.matches(&needle))
        .collect();

    debug!("Search '{}' matched {} emails", needle, emails.len());

    Ok(SearchResults {
        total: emails.len(),
        emails,
        query: needle,
    })
}
