//! Storage traits and implementations
//!
//! This module defines the storage abstraction layer for emails.
//! Handlers only see the [`EmailStore`] trait, so tests can build
//! isolated stores and other backends can be slotted in later.

mod memory;
mod seed;
mod traits;

pub use memory::InMemoryEmailStore;
pub use seed::seed_emails;
pub use traits::EmailStore;
