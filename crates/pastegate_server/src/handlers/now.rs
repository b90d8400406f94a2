//! Per-request "now", with the test-mode header override.

use crate::{clock::from_unix_millis, AppState, TEST_NOW_HEADER};
use axum::http::HeaderMap;
use chrono::{DateTime, Utc};

/// Instant to evaluate this request at.
///
/// With `TEST_MODE` on, a valid `x-test-now-ms` header wins over the clock.
pub(crate) fn request_now(state: &AppState, headers: &HeaderMap) -> DateTime<Utc> {
    if state.config.test_mode {
        if let Some(now) = header_now(headers) {
            return now;
        }
    }
    state.clock.now()
}

fn header_now(headers: &HeaderMap) -> Option<DateTime<Utc>> {
    let raw = headers.get(TEST_NOW_HEADER)?;
    let parsed = raw
        .to_str()
        .ok()
        .and_then(parse_leading_integer)
        .and_then(from_unix_millis);
    if parsed.is_none() {
        tracing::warn!(header = TEST_NOW_HEADER, value = ?raw, "ignoring unparsable time override");
    }
    parsed
}

/// Read the optionally signed decimal prefix of `value`, ignoring leading
/// whitespace and anything after the digits (`"123.5"` and `"123abc"` give 123).
fn parse_leading_integer(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let sign_len = usize::from(value.starts_with(['+', '-']));
    let digits_len = value[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    value[..sign_len + digits_len].parse().ok()
}
