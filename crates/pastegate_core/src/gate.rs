//! Access gate: decides whether a stored paste may be served and advances its
//! view counter when it is.
//!
//! Checks run in a fixed order and each one short-circuits:
//!
//! 1. expiry (`expires_at < now`, strict),
//! 2. view limit (`current_views >= max_views`, against the pre-increment count),
//! 3. consume: one conditional increment through the store.
//!
//! The gate keeps no state between calls. The at-most-`max_views` guarantee
//! rests on [`PasteStore::increment_views`] re-checking the limit atomically,
//! so two readers racing on the last view cannot both be served.

use crate::db::{PasteStore, ViewIncrement};
use crate::error::AppError;
use crate::models::paste::Paste;
use chrono::{DateTime, Utc};

/// Why a paste is unreachable through fetch.
///
/// The reasons stay distinct for logging and tests; the HTTP layer collapses
/// them into one not-found response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoneReason {
    /// No row for the id, or the id is malformed.
    Missing,
    /// TTL lapsed.
    Expired,
    /// The view counter reached `max_views`.
    ViewLimitExceeded,
}

impl GoneReason {
    /// Stable label for log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Expired => "expired",
            Self::ViewLimitExceeded => "view_limit_exceeded",
        }
    }
}

/// Content handed back after a successful gated fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServedPaste {
    pub content: String,
    /// `max_views - current_views` after this view; `None` when unlimited.
    pub remaining_views: Option<u64>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Result of running a fetch through the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Served(ServedPaste),
    Gone(GoneReason),
}

/// Pure servability check against a snapshot.
///
/// # Returns
/// `Ok(())` when the paste may be served at `now`.
///
/// # Errors
/// The first [`GoneReason`] that applies, expiry before view limit.
pub fn check(paste: &Paste, now: DateTime<Utc>) -> Result<(), GoneReason> {
    if paste.is_expired_at(now) {
        return Err(GoneReason::Expired);
    }
    if paste.views_exhausted() {
        return Err(GoneReason::ViewLimitExceeded);
    }
    Ok(())
}

/// Check `paste` at `now` and, on pass, consume one view through `store`.
///
/// # Arguments
/// - `store`: Store owning the row; receives at most one increment.
/// - `paste`: Snapshot fetched for this request.
/// - `now`: Instant the decision is made at.
///
/// # Returns
/// [`Outcome::Served`] built from the post-increment row, or
/// [`Outcome::Gone`] without touching the counter.
///
/// # Errors
/// Store failures propagate unchanged.
pub fn evaluate_and_consume<S>(
    store: &S,
    paste: &Paste,
    now: DateTime<Utc>,
) -> Result<Outcome, AppError>
where
    S: PasteStore + ?Sized,
{
    if let Err(reason) = check(paste, now) {
        return Ok(Outcome::Gone(reason));
    }

    match store.increment_views(&paste.id)? {
        ViewIncrement::Incremented(updated) => Ok(Outcome::Served(ServedPaste {
            remaining_views: updated.remaining_views(),
            expires_at: updated.expires_at,
            content: updated.content,
        })),
        ViewIncrement::LimitReached => {
            tracing::debug!(paste_id = %paste.id, "lost race for final view");
            Ok(Outcome::Gone(GoneReason::ViewLimitExceeded))
        }
        ViewIncrement::Missing => Ok(Outcome::Gone(GoneReason::Missing)),
    }
}
