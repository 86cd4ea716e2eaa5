//! Query API for listing and reading emails

mod emails;

pub use emails::{EmailListing, get_email, list_emails};
