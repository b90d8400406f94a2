//! Paste HTTP handlers.

use super::now::request_now;
use crate::{
    error::HttpError,
    models::paste::{CreatePasteRequest, CreatedPaste, PasteView},
    AppError, AppState,
};
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use pastegate_core::{paste_ops, Outcome};

/// Create a new paste.
///
/// The body is read as JSON whatever its `Content-Type`. Creation always
/// uses the server clock; the test-mode time header only affects fetches.
///
/// # Arguments
/// - `state`: Application state.
/// - `body`: Raw request body, or the extractor's rejection.
///
/// # Returns
/// `201` with the new id and its shareable URL.
///
/// # Errors
/// Returns a validation error for bad input, or a storage error if persistence fails.
pub async fn create_paste(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<CreatedPaste>), HttpError> {
    let req = parse_create_request(&body?)?;

    // Check paste size limit
    if let Some(content) = req.content.as_str() {
        if content.len() > state.config.max_paste_size {
            return Err(AppError::Validation(format!(
                "Paste size exceeds maximum of {} bytes",
                state.config.max_paste_size
            ))
            .into());
        }
    }

    let paste = paste_ops::create_paste(state.store.as_ref(), req, state.clock.now())?;
    let url = state.config.share_url(&paste.id);
    tracing::info!(paste_id = %paste.id, "created paste");

    Ok((StatusCode::CREATED, Json(CreatedPaste { id: paste.id, url })))
}

fn parse_create_request(body: &[u8]) -> Result<CreatePasteRequest, AppError> {
    serde_json::from_slice(body)
        .map_err(|err| AppError::Validation(format!("Invalid JSON body: {}", err)))
}

/// Fetch a paste by id, consuming one view.
///
/// # Arguments
/// - `state`: Application state.
/// - `id`: Paste identifier from the path.
/// - `headers`: Request headers (test-mode time override).
///
/// # Returns
/// Content, remaining views, and expiry as JSON.
///
/// # Errors
/// Returns not-found for unknown, expired, and view-exhausted pastes alike.
pub async fn get_paste(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<PasteView>, HttpError> {
    let now = request_now(&state, &headers);
    match paste_ops::fetch_paste(state.store.as_ref(), &id, now)? {
        Outcome::Served(served) => Ok(Json(served.into())),
        Outcome::Gone(reason) => {
            tracing::debug!(paste_id = %id, reason = reason.as_str(), "paste not served");
            Err(AppError::NotFound.into())
        }
    }
}

/// Delete a paste by id.
///
/// # Arguments
/// - `state`: Application state.
/// - `id`: Paste identifier from the path.
///
/// # Returns
/// Success marker as JSON.
///
/// # Errors
/// Returns not-found when no row exists, or a storage error if deletion fails.
pub async fn delete_paste(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, HttpError> {
    if paste_ops::delete_paste(state.store.as_ref(), &id)? {
        tracing::info!(paste_id = %id, "deleted paste");
        Ok(Json(serde_json::json!({ "success": true })))
    } else {
        Err(AppError::NotFound.into())
    }
}
