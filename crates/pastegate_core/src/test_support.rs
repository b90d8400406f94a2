//! Shared test-only helpers for pastegate_core.

use crate::models::paste::{NewPaste, Paste};
use crate::Database;
use chrono::{DateTime, Duration, TimeZone, Utc};
use tempfile::TempDir;

/// Creates an isolated temporary database and returns it with the temp dir.
///
/// Keep the [`TempDir`] alive for the full test to preserve the backing files.
///
/// # Panics
/// Panics if temp-dir creation or database initialization fails.
pub(crate) fn setup_temp_db() -> (Database, TempDir) {
    let temp_dir = TempDir::new().expect("temp dir");
    let db_path = temp_dir.path().join("test.db");
    let db = Database::new(db_path.to_str().expect("db path")).expect("db");
    (db, temp_dir)
}

/// Fixed reference instant used as "creation time" across tests.
pub(crate) fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
}

/// Build an unsaved paste created at [`t0`].
pub(crate) fn paste_at_t0(content: &str, ttl_seconds: Option<i64>, max_views: Option<u64>) -> Paste {
    Paste::new(
        NewPaste {
            content: content.to_string(),
            ttl: ttl_seconds.map(Duration::seconds),
            max_views,
        },
        t0(),
    )
    .expect("paste")
}
