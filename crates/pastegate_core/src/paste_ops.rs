//! Create, fetch and delete as the server sees them.

use crate::db::PasteStore;
use crate::error::AppError;
use crate::gate::{self, GoneReason, Outcome};
use crate::models::paste::{parse_paste_id, CreatePasteRequest, Paste};
use chrono::{DateTime, Utc};

/// Validate `request` and persist a new paste created at `now`.
///
/// Validation happens before any store call, so a rejected request leaves
/// the store untouched.
///
/// # Returns
/// The stored record.
///
/// # Errors
/// [`AppError::Validation`] for bad input; store errors otherwise.
pub fn create_paste<S>(
    store: &S,
    request: CreatePasteRequest,
    now: DateTime<Utc>,
) -> Result<Paste, AppError>
where
    S: PasteStore + ?Sized,
{
    let draft = request.validate()?;
    let paste = Paste::new(draft, now)?;
    store.create(&paste)?;
    tracing::debug!(
        paste_id = %paste.id,
        expires_at = ?paste.expires_at,
        max_views = ?paste.max_views,
        "paste created"
    );
    Ok(paste)
}

/// Fetch `raw_id` through the access gate at `now`.
///
/// Malformed and unknown ids both come back as [`GoneReason::Missing`].
///
/// # Errors
/// Store failures only; every "not available" case is an [`Outcome::Gone`].
pub fn fetch_paste<S>(store: &S, raw_id: &str, now: DateTime<Utc>) -> Result<Outcome, AppError>
where
    S: PasteStore + ?Sized,
{
    let Some(id) = parse_paste_id(raw_id) else {
        return Ok(Outcome::Gone(GoneReason::Missing));
    };
    let Some(snapshot) = store.get(&id)? else {
        return Ok(Outcome::Gone(GoneReason::Missing));
    };
    gate::evaluate_and_consume(store, &snapshot, now)
}

/// Delete `raw_id` without consulting the gate.
///
/// # Returns
/// `true` when a row existed, including expired or exhausted ones.
///
/// # Errors
/// Store failures.
pub fn delete_paste<S>(store: &S, raw_id: &str) -> Result<bool, AppError>
where
    S: PasteStore + ?Sized,
{
    match parse_paste_id(raw_id) {
        Some(id) => store.delete(&id),
        None => Ok(false),
    }
}
