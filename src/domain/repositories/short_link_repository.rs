//! Repository trait for short link data access.

use crate::domain::entities::ShortLink;
use crate::error::StoreError;
use async_trait::async_trait;

/// Repository interface for the single `short_links` collection.
///
/// Lookups are exact: no URL normalization happens here or anywhere upstream,
/// so `https://a.com` and `https://a.com/` are different records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryShortLinkRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_short_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortLinkRepository: Send + Sync {
    /// Finds a link by its original URL (exact string match).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on database errors.
    async fn find_by_original_url(&self, original_url: &str)
    -> Result<Option<ShortLink>, StoreError>;

    /// Finds a link by its numeric short code.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on database errors.
    async fn find_by_short_url(&self, short_url: i64) -> Result<Option<ShortLink>, StoreError>;

    /// Assigns `count() + 1` as the short code and persists a new link.
    ///
    /// Count and insert are two separate steps. A concurrent writer that wins
    /// the same code or the same URL in between surfaces as an error instead of
    /// a silent duplicate.
    ///
    /// # Errors
    ///
    /// - [`StoreError::CodeTaken`] if the computed code was assigned concurrently
    /// - [`StoreError::DuplicateUrl`] if the URL was shortened concurrently
    /// - [`StoreError::Database`] on database errors
    async fn create_next(&self, original_url: &str) -> Result<ShortLink, StoreError>;

    /// Counts all stored links.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on database errors.
    async fn count(&self) -> Result<i64, StoreError>;

    /// Lists links ordered by short code.
    ///
    /// # Arguments
    ///
    /// - `page` - Page number (1-indexed)
    /// - `page_size` - Number of items per page
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on database errors.
    async fn list(&self, page: i64, page_size: i64) -> Result<Vec<ShortLink>, StoreError>;
}
