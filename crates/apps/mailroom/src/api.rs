//! JSON response envelopes and error mapping
//!
//! Every response carries a `success` flag. Failures add an `error`
//! message and a 4xx/5xx status.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::{error, warn};
use mail::{Email, EmailListing, MailError, SearchResults};
use serde::Serialize;

pub type ApiResult<T> = Result<Json<T>, ApiError>;

/// Listing of a folder
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub success: bool,
    #[serde(flatten)]
    pub listing: EmailListing,
}

/// A single email
#[derive(Debug, Serialize)]
pub struct EmailResponse {
    pub success: bool,
    pub email: Email,
}

/// Acknowledgement of an action with no payload
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Acknowledgement of a send or reply, with the new email
#[derive(Debug, Serialize)]
pub struct SentResponse {
    pub success: bool,
    pub message: String,
    pub email: Email,
}

/// Search matches
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    #[serde(flatten)]
    pub results: SearchResults,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub success: bool,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub success: bool,
    pub summary: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

impl SentResponse {
    pub fn new(message: impl Into<String>, email: Email) -> Self {
        Self {
            success: true,
            message: message.into(),
            email,
        }
    }
}

/// Error returned from a handler, rendered as `{success: false, error}`
#[derive(Debug)]
pub enum ApiError {
    /// A mail operation failed
    Mail(MailError),
    /// The path exists but not for this HTTP method
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Mail(MailError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Mail(MailError::InvalidArgument { .. }) => StatusCode::BAD_REQUEST,
            Self::Mail(MailError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Mail(e) => e.to_string(),
            Self::MethodNotAllowed => "Method not allowed".to_string(),
        }
    }
}

impl From<MailError> for ApiError {
    fn from(e: MailError) -> Self {
        Self::Mail(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        if status.is_server_error() {
            error!("Request failed: {}", message);
        } else {
            warn!("Request rejected ({}): {}", status.as_u16(), message);
        }

        let body = ErrorBody {
            success: false,
            error: message,
        };
        (status, Json(body)).into_response()
    }
}
