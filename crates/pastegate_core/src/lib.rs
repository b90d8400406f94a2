//! Core domain library for Pastegate (config, storage, models, access gate).

/// Time source abstraction.
pub mod clock;
/// Configuration loading and defaults.
pub mod config;
/// Shared constants.
pub mod constants;
/// Record store trait and its backends.
pub mod db;
/// Process-global environment helpers.
pub mod env;
/// Application error types (storage/domain).
pub mod error;
/// Access decisions for stored pastes.
pub mod gate;
/// Data models for API requests and persistence.
pub mod models;
/// Create/fetch/delete operations composed from the store and the gate.
pub mod paste_ops;

#[cfg(test)]
pub(crate) mod test_support;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use constants::{DEFAULT_MAX_PASTE_SIZE, DEFAULT_PORT, TEST_NOW_HEADER};
pub use db::{Database, PasteStore, ViewIncrement};
pub use error::AppError;
pub use gate::{GoneReason, Outcome, ServedPaste};
