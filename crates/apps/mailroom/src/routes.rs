//! HTTP routes
//!
//! Thin handlers over the mail crate. Each one extracts request data,
//! calls a single mail operation and wraps the result in an envelope.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{debug, info};
use mail::{EmailFilter, EmailId, MailError, ReplyRequest, ReplySuggester, SendRequest, Summarizer};
use serde::Deserialize;

use crate::api::{
    ApiError, ApiResult, EmailResponse, ListResponse, MessageResponse, SearchResponse,
    SentResponse, SuggestionsResponse, SummaryResponse,
};
use crate::state::AppState;

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/emails", get(list_emails))
        .route("/emails/search", get(search_emails))
        .route("/emails/send", post(send_email))
        .route("/emails/{id}", get(get_email))
        .route("/emails/{id}/read", post(mark_email_read))
        .route("/emails/{id}/reply", post(reply_to_email))
        .route("/ai/smart-reply", post(smart_reply))
        .route("/ai/summarize", post(summarize))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let response = next.run(request).await;
    info!("{} {} -> {}", method, path, response.status().as_u16());
    response
}

async fn not_found() -> ApiError {
    MailError::not_found("Resource").into()
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

type IdSegment = Result<Path<String>, PathRejection>;

/// Parse an ID path segment. Anything that isn't an integer, including a
/// segment that doesn't decode to UTF-8, can't name an email.
fn parse_id(segment: IdSegment, resource: &str) -> Result<EmailId, ApiError> {
    let raw = match segment {
        Ok(Path(raw)) => raw,
        Err(rejection) => {
            debug!("Unusable id segment: {}", rejection);
            return Err(MailError::not_found(resource).into());
        }
    };
    raw.parse::<u64>()
        .map(EmailId::new)
        .map_err(|_| MailError::not_found(resource).into())
}

type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// Query string parameters. A repeated key keeps its first value.
struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    fn new(pairs: QueryPairs) -> Self {
        match pairs {
            Ok(Query(pairs)) => Self(pairs),
            Err(rejection) => {
                debug!("Ignoring unusable query string: {}", rejection);
                Self(Vec::new())
            }
        }
    }

    fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Unwrap an optional JSON body, treating a missing or malformed one as empty
fn body_or_default<T: Default>(payload: Result<Json<T>, JsonRejection>) -> T {
    match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            debug!("Ignoring unusable request body: {}", rejection);
            T::default()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ContentRequest {
    #[serde(default)]
    content: Option<String>,
}

async fn list_emails(
    State(state): State<AppState>,
    query: QueryPairs,
) -> ApiResult<ListResponse> {
    let params = QueryParams::new(query);
    let folder = params.first("folder").unwrap_or(mail::models::DEFAULT_FOLDER);
    let filter = params
        .first("filter")
        .map(EmailFilter::parse)
        .unwrap_or_default();

    let listing = mail::list_emails(state.store.as_ref(), folder, filter)?;
    Ok(Json(ListResponse {
        success: true,
        listing,
    }))
}

async fn get_email(
    State(state): State<AppState>,
    id: IdSegment,
) -> ApiResult<EmailResponse> {
    let id = parse_id(id, "Email")?;
    let email = mail::get_email(state.store.as_ref(), &id)?;
    Ok(Json(EmailResponse {
        success: true,
        email,
    }))
}

async fn mark_email_read(
    State(state): State<AppState>,
    id: IdSegment,
) -> ApiResult<MessageResponse> {
    let id = parse_id(id, "Email")?;
    state.actions.mark_read(&id)?;
    Ok(Json(MessageResponse::new("Email marked as read")))
}

async fn send_email(
    State(state): State<AppState>,
    payload: Result<Json<SendRequest>, JsonRejection>,
) -> ApiResult<SentResponse> {
    let request = body_or_default(payload);
    let email = state.actions.send_email(&request)?;
    Ok(Json(SentResponse::new("Email sent successfully", email)))
}

async fn reply_to_email(
    State(state): State<AppState>,
    id: IdSegment,
    payload: Result<Json<ReplyRequest>, JsonRejection>,
) -> ApiResult<SentResponse> {
    let id = parse_id(id, "Original email")?;
    let request = body_or_default(payload);
    let email = state.actions.reply_to_email(&id, &request)?;
    Ok(Json(SentResponse::new("Reply sent successfully", email)))
}

async fn search_emails(
    State(state): State<AppState>,
    query: QueryPairs,
) -> ApiResult<SearchResponse> {
    let params = QueryParams::new(query);
    let q = params.first("q").unwrap_or_default();
    let results = mail::search_emails(state.store.as_ref(), q)?;
    Ok(Json(SearchResponse {
        success: true,
        results,
    }))
}

async fn smart_reply(
    State(state): State<AppState>,
    payload: Result<Json<ContentRequest>, JsonRejection>,
) -> ApiResult<SuggestionsResponse> {
    let request = body_or_default(payload);
    let suggestions = state
        .suggester
        .suggest(request.content.as_deref().unwrap_or_default());
    Ok(Json(SuggestionsResponse {
        success: true,
        suggestions,
    }))
}

async fn summarize(
    State(state): State<AppState>,
    payload: Result<Json<ContentRequest>, JsonRejection>,
) -> ApiResult<SummaryResponse> {
    let request = body_or_default(payload);
    let summary = state
        .summarizer
        .summarize(request.content.as_deref().unwrap_or_default());
    Ok(Json(SummaryResponse {
        success: true,
        summary,
    }))
}
