//! In-memory implementation of the short link repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::ShortLink;
use crate::domain::repositories::ShortLinkRepository;
use crate::error::StoreError;

/// Process-local store used when no database is configured, and in tests.
///
/// Records live in a [`DashMap`] keyed by short code, with a second map from
/// original URL to short code. Both uniqueness rules of the SQL schema are
/// enforced through the entry API. Concurrent `create_next` calls may compute
/// the same code, and the loser gets [`StoreError::CodeTaken`] for the service
/// to retry. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryShortLinkRepository {
    by_code: DashMap<i64, ShortLink>,
    by_url: DashMap<String, i64>,
    next_id: AtomicI64,
}

impl InMemoryShortLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShortLinkRepository for InMemoryShortLinkRepository {
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<ShortLink>, StoreError> {
        let Some(code) = self.by_url.get(original_url).map(|c| *c) else {
            return Ok(None);
        };

        Ok(self.by_code.get(&code).map(|link| link.clone()))
    }

    async fn find_by_short_url(&self, short_url: i64) -> Result<Option<ShortLink>, StoreError> {
        Ok(self.by_code.get(&short_url).map(|link| link.clone()))
    }

    async fn create_next(&self, original_url: &str) -> Result<ShortLink, StoreError> {
        let short_url = self.count().await? + 1;

        // URL slot first: losing here means the record never becomes visible.
        let url_slot = match self.by_url.entry(original_url.to_string()) {
            Entry::Occupied(_) => return Err(StoreError::DuplicateUrl),
            Entry::Vacant(slot) => slot,
        };

        let link = match self.by_code.entry(short_url) {
            Entry::Occupied(_) => return Err(StoreError::CodeTaken(short_url)),
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
                let link = ShortLink::new(id, original_url.to_string(), short_url, Utc::now());
                slot.insert(link.clone());
                link
            }
        };

        url_slot.insert(short_url);

        Ok(link)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.by_code.len() as i64)
    }

    async fn list(&self, page: i64, page_size: i64) -> Result<Vec<ShortLink>, StoreError> {
        let mut links: Vec<ShortLink> = self.by_code.iter().map(|e| e.value().clone()).collect();
        links.sort_by_key(|link| link.short_url);

        let offset = (page.max(1) - 1).saturating_mul(page_size).max(0) as usize;

        Ok(links
            .into_iter()
            .skip(offset)
            .take(page_size.max(0) as usize)
            .collect())
    }
}
