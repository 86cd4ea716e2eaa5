//! In-memory storage implementation
//!
//! Nothing survives a restart. The store is seeded with demo data at
//! startup and mutated in place afterwards.

use anyhow::{Result, anyhow};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{EmailStore, seed_emails};
use crate::models::{Email, EmailId};

/// Emails keyed by ID plus the collection order
#[derive(Default)]
struct EmailIndex {
    emails: HashMap<EmailId, Email>,
    /// Collection order, front first
    order: VecDeque<EmailId>,
}

impl EmailIndex {
    fn insert(&mut self, email: Email, front: bool) {
        let id = email.id;
        if self.emails.insert(id, email).is_some() {
            // Re-inserting an ID moves it instead of duplicating it in the order
            self.order.retain(|existing| *existing != id);
        }
        if front {
            self.order.push_front(id);
        } else {
            self.order.push_back(id);
        }
    }
}

/// In-memory implementation of EmailStore
///
/// A single RwLock guards the map and its order index so the two never
/// disagree. IDs come from an atomic counter that always stays ahead of
/// every stored ID.
pub struct InMemoryEmailStore {
    index: RwLock<EmailIndex>,
    next_id: AtomicU64,
}

impl InMemoryEmailStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self {
            index: RwLock::new(EmailIndex::default()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Create a store pre-filled with the demo mailbox
    pub fn seeded() -> Result<Self> {
        let store = Self::new();
        for email in seed_emails() {
            store.append_email(email)?;
        }
        Ok(store)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, EmailIndex>> {
        self.index
            .read()
            .map_err(|_| anyhow!("email index lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, EmailIndex>> {
        self.index
            .write()
            .map_err(|_| anyhow!("email index lock poisoned"))
    }

    fn insert(&self, email: Email, front: bool) -> Result<()> {
        // Keep the counter past explicitly numbered emails (e.g. seed data)
        self.next_id
            .fetch_max(email.id.get().saturating_add(1), Ordering::SeqCst);
        self.write()?.insert(email, front);
        Ok(())
    }
}

impl Default for InMemoryEmailStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailStore for InMemoryEmailStore {
    fn get_email(&self, id: &EmailId) -> Result<Option<Email>> {
        Ok(self.read()?.emails.get(id).cloned())
    }

    fn has_email(&self, id: &EmailId) -> Result<bool> {
        Ok(self.read()?.emails.contains_key(id))
    }

    fn list_emails(&self) -> Result<Vec<Email>> {
        let index = self.read()?;
        Ok(index
            .order
            .iter()
            .filter_map(|id| index.emails.get(id).cloned())
            .collect())
    }

    fn prepend_email(&self, email: Email) -> Result<()> {
        self.insert(email, true)
    }

    fn append_email(&self, email: Email) -> Result<()> {
        self.insert(email, false)
    }

    fn set_read(&self, id: &EmailId, read: bool) -> Result<bool> {
        let mut index = self.write()?;
        match index.emails.get_mut(id) {
            Some(email) => {
                email.read = read;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn allocate_id(&self) -> Result<EmailId> {
        Ok(EmailId::new(self.next_id.fetch_add(1, Ordering::SeqCst)))
    }

    fn count_emails(&self) -> Result<usize> {
        Ok(self.read()?.emails.len())
    }

    fn count_unread(&self) -> Result<usize> {
        Ok(self.read()?.emails.values().filter(|e| !e.read).count())
    }

    fn clear(&self) -> Result<()> {
        let mut index = self.write()?;
        index.emails.clear();
        index.order.clear();
        Ok(())
    }
}
