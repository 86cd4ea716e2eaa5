//! Domain models for mail entities

mod email;
mod filter;

pub use email::{Email, EmailBuilder, EmailId, OUTGOING_SENDER, OUTGOING_TIME, PREVIEW_LEN, make_preview};
pub use filter::{DEFAULT_FOLDER, EmailFilter};
