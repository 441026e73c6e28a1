//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::warn;

use crate::state::AppState;

/// Template for the landing page.
///
/// Renders `templates/index.html`: the shorten form and usage examples.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Number of links stored so far, omitted when the store is unavailable.
    pub link_count: Option<i64>,
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    let link_count = match state.link_service.count().await {
        Ok(count) => Some(count),
        Err(e) => {
            warn!(error = %e, "Could not count links for landing page");
            None
        }
    };

    IndexTemplate { link_count }
}
