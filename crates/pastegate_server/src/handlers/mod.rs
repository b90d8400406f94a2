//! HTTP request handlers.

pub(crate) mod now;
/// Paste-related endpoints.
pub mod paste;
