//! Data models for API requests and persistence.

/// Paste record, create-request validation, and response shapes.
pub mod paste;
