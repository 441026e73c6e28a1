//! ShortLink entity mapping an original URL to its numeric short code.

use chrono::{DateTime, Utc};

/// A persisted short link.
///
/// `id` and `created_at` are assigned by the store and never leave the service;
/// clients only ever see `original_url` and `short_url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub id: i64,
    pub original_url: String,
    pub short_url: i64,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(id: i64, original_url: String, short_url: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            original_url,
            short_url,
            created_at,
        }
    }
}
