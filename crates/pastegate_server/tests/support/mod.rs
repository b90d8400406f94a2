//! Shared integration-test server bootstrap helpers.

use axum_test::TestServer;
use chrono::{DateTime, TimeZone, Utc};
use pastegate_server::{create_app, AppState, Config, Database, FixedClock};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

pub(crate) const BASE_URL: &str = "http://paste.test";

/// 2026-01-01T00:00:00Z in unix milliseconds.
pub(crate) const T0_MS: i64 = 1_767_225_600_000;

pub(crate) fn t0() -> DateTime<Utc> {
    Utc.timestamp_millis_opt(T0_MS).single().expect("t0")
}

pub(crate) fn test_config_for_db_path(db_path: &Path, test_mode: bool) -> Config {
    Config {
        port: 0,
        db_path: db_path.to_str().expect("db path").to_string(),
        max_paste_size: 10_000_000,
        public_base_url: BASE_URL.to_string(),
        test_mode,
    }
}

/// Server on a temp redb database with its clock pinned at [`t0`].
pub(crate) fn test_server_for_config(config: Config) -> TestServer {
    let db = Database::new(config.db_path.as_str()).expect("open db");
    let state = AppState::with_clock(config, Arc::new(db), Arc::new(FixedClock::new(t0())));
    let app = create_app(state, false);
    TestServer::new(app).expect("server")
}

pub(crate) fn setup_server(test_mode: bool) -> (TestServer, TempDir) {
    let temp_dir = TempDir::new().expect("temp dir");
    let db_path = temp_dir.path().join("test.db");
    let config = test_config_for_db_path(&db_path, test_mode);
    (test_server_for_config(config), temp_dir)
}

pub(crate) fn setup_test_server() -> (TestServer, TempDir) {
    setup_server(true)
}
