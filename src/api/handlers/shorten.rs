//! Handler for link shortening endpoint.

use axum::{Form, Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenForm, ShortenResponse};
use crate::error::{AppError, ValidationError};
use crate::state::AppState;

/// Shortens a URL submitted from an HTML form.
///
/// # Endpoint
///
/// `POST /api/shorturl` (`application/x-www-form-urlencoded`, field `url`)
///
/// # Response
///
/// ```json
/// { "original_url": "https://www.example.com/page", "short_url": 1 }
/// ```
///
/// Submitting a URL that was shortened before returns the same `short_url`.
///
/// # Errors
///
/// - `{"error": "invalid URL"}` with 200 OK if the hostname does not resolve
/// - `{"error": "internal server error"}` with 500 on storage failures
pub async fn shorten_handler(
    State(state): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> Result<Json<ShortenResponse>, AppError> {
    form.validate().map_err(|_| ValidationError::Empty)?;

    let link = state.link_service.shorten(&form.url).await?;

    Ok(Json(link.into()))
}
