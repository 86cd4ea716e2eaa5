//! Shared handler state

use std::sync::Arc;

use mail::{ActionHandler, CannedAssistant, EmailStore, ReplySuggester, Summarizer};

/// State handed to every request handler
///
/// Cloning is cheap; everything is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EmailStore>,
    pub actions: Arc<ActionHandler>,
    pub suggester: Arc<dyn ReplySuggester>,
    pub summarizer: Arc<dyn Summarizer>,
}

impl AppState {
    /// Build state over a store, using the canned assistant
    pub fn new(store: Arc<dyn EmailStore>) -> Self {
        let assistant = Arc::new(CannedAssistant::new());
        Self::with_assistant(store, assistant.clone(), assistant)
    }

    /// Build state with custom suggestion and summary backends
    pub fn with_assistant(
        store: Arc<dyn EmailStore>,
        suggester: Arc<dyn ReplySuggester>,
        summarizer: Arc<dyn Summarizer>,
    ) -> Self {
        Self {
            actions: Arc::new(ActionHandler::new(store.clone())),
            store,
            suggester,
            summarizer,
        }
    }
}
