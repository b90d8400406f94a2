//! Paste-related data models and create-request validation.

use crate::clock::truncate_to_millis;
use crate::error::AppError;
use crate::gate::ServedPaste;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Paste row stored in the database.
///
/// Everything except `current_views` is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paste {
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub max_views: Option<u64>,
    pub current_views: u64,
}

/// Request payload for creating a paste.
///
/// Fields stay as raw JSON so that type mismatches surface as validation
/// errors instead of body rejections. `null` and a missing field are the same.
#[derive(Debug, Default, Deserialize)]
pub struct CreatePasteRequest {
    #[serde(default)]
    pub content: Value,
    #[serde(default)]
    pub ttl_seconds: Value,
    #[serde(default)]
    pub max_views: Value,
}

/// A create request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPaste {
    pub content: String,
    pub ttl: Option<Duration>,
    pub max_views: Option<u64>,
}

/// Response body for a successful create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedPaste {
    pub id: String,
    pub url: String,
}

/// Response body for a successful fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasteView {
    pub content: String,
    pub remaining_views: Option<u64>,
    pub expires_at: Option<String>,
}

impl CreatePasteRequest {
    /// Validate and normalize the request.
    ///
    /// # Returns
    /// A [`NewPaste`] with trimmed content.
    ///
    /// # Errors
    /// Returns [`AppError::Validation`] when content is missing, not a string,
    /// or blank after trimming, or when `ttl_seconds`/`max_views` are present
    /// but not integers `>= 1`.
    pub fn validate(self) -> Result<NewPaste, AppError> {
        let content = match self.content {
            Value::String(raw) => raw.trim().to_string(),
            _ => String::new(),
        };
        if content.is_empty() {
            return Err(AppError::Validation(
                "Content is required and must be a non-empty string".to_string(),
            ));
        }

        let ttl = positive_integer(&self.ttl_seconds, "ttl_seconds")?
            .map(|seconds| {
                i64::try_from(seconds)
                    .ok()
                    .and_then(Duration::try_seconds)
                    .ok_or_else(ttl_too_large)
            })
            .transpose()?;
        let max_views = positive_integer(&self.max_views, "max_views")?;

        Ok(NewPaste {
            content,
            ttl,
            max_views,
        })
    }
}

fn ttl_too_large() -> AppError {
    AppError::Validation("ttl_seconds is too large".to_string())
}

/// Accepts JSON integers and integral floats; `null` means "not set".
fn positive_integer(value: &Value, field: &str) -> Result<Option<u64>, AppError> {
    let invalid = || AppError::Validation(format!("{} must be an integer >= 1", field));
    let number = match value {
        Value::Null => return Ok(None),
        Value::Number(number) => number,
        _ => return Err(invalid()),
    };
    let parsed = number.as_u64().or_else(|| {
        number
            .as_f64()
            .filter(|float| float.fract() == 0.0 && *float >= 1.0 && *float < u64::MAX as f64)
            .map(|float| float as u64)
    });
    match parsed {
        Some(value) if value >= 1 => Ok(Some(value)),
        _ => Err(invalid()),
    }
}

impl Paste {
    /// Build a fresh record with a new id and zero views.
    ///
    /// # Arguments
    /// - `draft`: Validated create request.
    /// - `now`: Creation instant; truncated to milliseconds.
    ///
    /// # Errors
    /// Returns [`AppError::Validation`] when `now + ttl` is not representable.
    pub fn new(draft: NewPaste, now: DateTime<Utc>) -> Result<Self, AppError> {
        let created_at = truncate_to_millis(now);
        let expires_at = draft
            .ttl
            .map(|ttl| created_at.checked_add_signed(ttl).ok_or_else(ttl_too_large))
            .transpose()?;
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            content: draft.content,
            created_at,
            expires_at,
            max_views: draft.max_views,
            current_views: 0,
        })
    }

    /// Whether the TTL has lapsed. A paste expiring exactly at `now` is still live.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at < now)
    }

    /// Whether the view counter has reached the limit.
    pub fn views_exhausted(&self) -> bool {
        self.max_views
            .is_some_and(|max_views| self.current_views >= max_views)
    }

    /// Views left before the limit trips; `None` when unlimited.
    pub fn remaining_views(&self) -> Option<u64> {
        self.max_views
            .map(|max_views| max_views.saturating_sub(self.current_views))
    }
}

impl From<ServedPaste> for PasteView {
    fn from(served: ServedPaste) -> Self {
        Self {
            content: served.content,
            remaining_views: served.remaining_views,
            expires_at: served.expires_at.map(format_instant),
        }
    }
}

/// Canonicalize a client-supplied id.
///
/// # Returns
/// The hyphenated lowercase UUID, or `None` when `raw` is not a UUID.
pub fn parse_paste_id(raw: &str) -> Option<String> {
    Uuid::parse_str(raw.trim())
        .ok()
        .map(|id| id.hyphenated().to_string())
}

/// Render an instant as ISO-8601 UTC with milliseconds (`...T00:00:10.000Z`).
pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
