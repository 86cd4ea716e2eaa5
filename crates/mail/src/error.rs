//! Error type for mail operations

/// Errors surfaced by mail queries and actions
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// The requested record does not exist
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// A required field was missing or empty
    #[error("{message}")]
    InvalidArgument { message: String },

    /// The storage backend failed
    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl MailError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

pub type MailResult<T> = std::result::Result<T, MailError>;
