//! Email actions module
//!
//! Provides the action handler for mailbox mutations:
//! sending, replying and marking emails as read.

mod handler;

pub use handler::{ActionHandler, REPLY_PREFIX, ReplyRequest, SendRequest};
