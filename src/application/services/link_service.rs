//! Short link creation and resolution service.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::{Instant, sleep};
use tracing::{debug, info, instrument, warn};

use crate::application::services::UrlValidator;
use crate::domain::entities::ShortLink;
use crate::domain::repositories::ShortLinkRepository;
use crate::error::{AppError, StoreError};

/// How long count+insert is retried while concurrent writers keep taking
/// the computed short code.
const CREATE_RETRY_WINDOW: Duration = Duration::from_secs(5);

/// First pause between retries, doubled up to [`MAX_RETRY_BACKOFF`].
const INITIAL_RETRY_BACKOFF: Duration = Duration::from_millis(2);
const MAX_RETRY_BACKOFF: Duration = Duration::from_millis(100);

/// Service composing URL validation and the short link store.
///
/// # Shorten
///
/// 1. Validate the hostname (DNS lookup)
/// 2. Return the existing record for the exact same URL, if any
/// 3. Otherwise assign `count + 1` and persist
///
/// # Resolve
///
/// Coerces the path segment to an integer and looks it up.
pub struct LinkService {
    repository: Arc<dyn ShortLinkRepository>,
    validator: UrlValidator,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(repository: Arc<dyn ShortLinkRepository>, validator: UrlValidator) -> Self {
        Self {
            repository,
            validator,
        }
    }

    /// Shortens `raw_url`, reusing the existing record when the URL was seen before.
    ///
    /// The URL is stored exactly as given.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if the hostname does not resolve.
    /// Returns [`AppError::Store`] on storage errors.
    #[instrument(skip(self))]
    pub async fn shorten(&self, raw_url: &str) -> Result<ShortLink, AppError> {
        self.validator.validate(raw_url).await?;

        if let Some(existing) = self.repository.find_by_original_url(raw_url).await? {
            debug!(short_url = existing.short_url, "URL already shortened");
            return Ok(existing);
        }

        let link = self.create_next(raw_url).await?;
        info!(short_url = link.short_url, "Created short link");

        Ok(link)
    }

    /// Resolves a short code taken from a URL path segment.
    ///
    /// Text that is not an integral number matches nothing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    /// Returns [`AppError::Store`] on storage errors.
    #[instrument(skip(self))]
    pub async fn resolve(&self, code: &str) -> Result<ShortLink, AppError> {
        let Some(short_url) = parse_short_code(code) else {
            debug!("Short code is not an integer");
            return Err(AppError::NotFound(code.to_string()));
        };

        self.repository
            .find_by_short_url(short_url)
            .await?
            .ok_or_else(|| AppError::NotFound(code.to_string()))
    }

    /// Total number of stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on storage errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        Ok(self.repository.count().await?)
    }

    /// Lists stored links ordered by short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on storage errors.
    pub async fn list(&self, page: i64, page_size: i64) -> Result<Vec<ShortLink>, AppError> {
        Ok(self.repository.list(page, page_size).await?)
    }

    /// Runs count+insert, retrying when a concurrent writer took the code.
    ///
    /// Every round has a winner, so a burst of `k` writers settles within `k`
    /// rounds. Retries stop once [`CREATE_RETRY_WINDOW`] has passed.
    /// If a concurrent writer stored the same URL first, its record is returned.
    async fn create_next(&self, raw_url: &str) -> Result<ShortLink, StoreError> {
        let deadline = Instant::now() + CREATE_RETRY_WINDOW;
        let mut backoff = INITIAL_RETRY_BACKOFF;
        let mut attempt = 0;

        loop {
            attempt += 1;

            match self.repository.create_next(raw_url).await {
                Ok(link) => return Ok(link),
                Err(StoreError::CodeTaken(code)) => {
                    if Instant::now() + backoff >= deadline {
                        return Err(StoreError::Exhausted(attempt));
                    }
                    warn!(code, attempt, "Short code collision, retrying");
                    sleep(backoff).await;
                    backoff = (backoff * 2).min(MAX_RETRY_BACKOFF);
                }
                Err(StoreError::DuplicateUrl) => {
                    debug!("URL stored concurrently, returning existing record");
                    return self
                        .repository
                        .find_by_original_url(raw_url)
                        .await?
                        .ok_or(StoreError::DuplicateUrl);
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Coerces a path segment to a short code.
///
/// Accepts integers and integral decimal or exponent forms (`"1.0"`, `"1e0"`).
/// Fractions, non-finite values and anything else are `None`.
fn parse_short_code(code: &str) -> Option<i64> {
    let code = code.trim();

    if let Ok(n) = code.parse::<i64>() {
        return Some(n);
    }

    let n = code.parse::<f64>().ok()?;
    let integral = n.is_finite() && n.fract() == 0.0;
    // i64::MAX as f64 rounds up to 2^63, which is out of range.
    let in_range = n >= i64::MIN as f64 && n < i64::MAX as f64;

    (integral && in_range).then_some(n as i64)
}
