//! Canned assistant that ignores content semantics

use super::{ReplySuggester, Summarizer};

/// Suggestions the canned assistant draws from
pub const SUGGESTION_POOL: [&str; 5] = [
    "Thank you for the update!",
    "I'll review this and get back to you.",
    "Sounds good, let's proceed.",
    "Could you provide more details?",
    "I appreciate your help with this.",
];

/// Number of suggestions returned per request
pub const SUGGESTION_LIMIT: usize = 3;

/// Characters of content quoted in a summary
pub const SUMMARY_PREFIX_LEN: usize = 50;

/// Summary returned when there is nothing to summarize
pub const NO_CONTENT_SUMMARY: &str = "No content to summarize";

/// Placeholder assistant with fixed output
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedAssistant;

impl CannedAssistant {
    pub fn new() -> Self {
        Self
    }
}

impl ReplySuggester for CannedAssistant {
    fn suggest(&self, _content: &str) -> Vec<String> {
        SUGGESTION_POOL
            .iter()
            .take(SUGGESTION_LIMIT)
            .map(|s| s.to_string())
            .collect()
    }
}

impl Summarizer for CannedAssistant {
    fn summarize(&self, content: &str) -> String {
        if content.is_empty() {
            return NO_CONTENT_SUMMARY.to_string();
        }
        let quoted: String = content.chars().take(SUMMARY_PREFIX_LEN).collect();
        format!("Summary: This email discusses {}...", quoted)
    }
}
