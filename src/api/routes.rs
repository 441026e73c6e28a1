//! API route configuration.

use crate::api::handlers::{redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public API routes. No authentication.
///
/// # Endpoints
///
/// - `POST /shorturl`            - Shorten a URL (form field `url`)
/// - `GET  /shorturl/{shorturl}` - Redirect to the original URL
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorturl", post(shorten_handler))
        .route("/shorturl/{shorturl}", get(redirect_handler))
}
