//! Mail crate - Business logic for the mock mailbox
//!
//! This crate provides platform-independent mail functionality including:
//! - Domain models (Email, EmailId, EmailFilter)
//! - Storage trait abstraction with an in-memory implementation
//! - Query API for listing and reading
//! - Action handlers for mutations (send, reply, mark read)
//! - Substring search
//! - Pluggable writing assistance (reply suggestions, summaries)
//!
//! This crate has no HTTP dependencies; the server binary wraps it.

pub mod actions;
pub mod assist;
pub mod error;
pub mod models;
pub mod query;
pub mod search;
pub mod storage;

pub use actions::{ActionHandler, ReplyRequest, SendRequest};
pub use assist::{CannedAssistant, ReplySuggester, Summarizer};
pub use error::{MailError, MailResult};
pub use models::{Email, EmailFilter, EmailId, make_preview};
pub use query::{EmailListing, get_email, list_emails};
pub use search::{SearchResults, search_emails};
pub use storage::{EmailStore, InMemoryEmailStore, seed_emails};
