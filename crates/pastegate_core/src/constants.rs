//! Shared constants used across Pastegate crates.

/// Default API port for Pastegate.
pub const DEFAULT_PORT: u16 = 38412;

/// Default maximum request body size accepted by the API layer.
pub const DEFAULT_MAX_PASTE_SIZE: usize = 10 * 1024 * 1024;

/// Request header carrying an explicit "now" (unix millis) in test mode.
pub const TEST_NOW_HEADER: &str = "x-test-now-ms";

/// Path prefix of the human-facing paste link.
pub const SHARE_PATH_PREFIX: &str = "/p/";
