//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::location::encode_location;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{shorturl}`
///
/// Returns `302 Found` with the stored URL in `Location`. Characters that
/// cannot appear in a header (controls, spaces, non-ASCII) are percent-encoded.
///
/// # Errors
///
/// - `{"error": "no matching URL"}` with 200 OK for unknown or non-numeric codes
/// - `{"error": "internal server error"}` with 500 on storage failures
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.resolve(&code).await?;

    debug!(short_url = link.short_url, "Redirecting");

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, encode_location(&link.original_url))],
    ))
}
