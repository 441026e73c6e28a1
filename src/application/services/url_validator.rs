//! URL validation by hostname resolution.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::domain::resolver::HostResolver;
use crate::error::ValidationError;
use crate::utils::hostname::extract_hostname;

/// Checks that a submitted URL names a host that actually resolves.
///
/// Only the hostname is looked up; the rest of the URL is never inspected and
/// the caller persists the raw input untouched.
pub struct UrlValidator {
    resolver: Arc<dyn HostResolver>,
    timeout: Option<Duration>,
}

impl UrlValidator {
    /// Creates a validator. `timeout` bounds each lookup; `None` waits as long
    /// as the resolver does.
    pub fn new(resolver: Arc<dyn HostResolver>, timeout: Option<Duration>) -> Self {
        Self { resolver, timeout }
    }

    /// Validates `raw_url` and returns its bare hostname.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::Empty`] if no hostname can be extracted
    /// - [`ValidationError::NoAddress`] if the lookup returns nothing
    /// - [`ValidationError::Lookup`] if the resolver reports an error
    /// - [`ValidationError::Timeout`] if the lookup exceeds the timeout
    pub async fn validate<'a>(&self, raw_url: &'a str) -> Result<&'a str, ValidationError> {
        let host = extract_hostname(raw_url.trim_start());
        if host.is_empty() {
            return Err(ValidationError::Empty);
        }

        let lookup = self.resolver.resolve(host);
        let result = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, lookup).await.map_err(|_| {
                warn!(host, "Hostname lookup timed out");
                ValidationError::Timeout {
                    host: host.to_string(),
                    seconds: limit.as_secs(),
                }
            })?,
            None => lookup.await,
        };

        match result {
            Ok(addrs) if !addrs.is_empty() => {
                debug!(host, "Hostname resolved");
                Ok(host)
            }
            Ok(_) => Err(ValidationError::NoAddress(host.to_string())),
            Err(source) => {
                warn!(host, error = %source, "Hostname lookup failed");
                Err(ValidationError::Lookup {
                    host: host.to_string(),
                    source,
                })
            }
        }
    }
}
