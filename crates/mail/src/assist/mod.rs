//! Writing assistance capabilities
//!
//! Reply suggestions and summaries sit behind traits so the canned
//! implementation can be swapped for a model-backed one without touching
//! callers.

mod canned;

pub use canned::{CannedAssistant, NO_CONTENT_SUMMARY, SUGGESTION_LIMIT, SUGGESTION_POOL, SUMMARY_PREFIX_LEN};

/// Suggests short replies to an email
pub trait ReplySuggester: Send + Sync {
    /// Suggest replies for the given email content
    fn suggest(&self, content: &str) -> Vec<String>;
}

/// Produces a one-line summary of an email
pub trait Summarizer: Send + Sync {
    /// Summarize the given email content
    fn summarize(&self, content: &str) -> String;
}
