//! Listing filters

use serde::{Deserialize, Serialize};

/// Folder assumed when a listing request names none
pub const DEFAULT_FOLDER: &str = "inbox";

/// Filter applied when listing emails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailFilter {
    #[default]
    All,
    Unread,
    /// Starring is not supported, so this filter always yields nothing
    Starred,
}

impl EmailFilter {
    /// Parse a filter name. Unknown names fall back to [`EmailFilter::All`].
    pub fn parse(s: &str) -> Self {
        match s {
            "unread" => Self::Unread,
            "starred" => Self::Starred,
            _ => Self::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Unread => "unread",
            Self::Starred => "starred",
        }
    }
}
