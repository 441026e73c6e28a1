//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;

/// Application state cloned per request.
///
/// The service owns the long-lived store handle; handlers never touch the
/// store directly.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    /// Human-readable name of the active store, reported by `/health`.
    pub store_kind: &'static str,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>, store_kind: &'static str) -> Self {
        Self {
            link_service,
            store_kind,
        }
    }
}
