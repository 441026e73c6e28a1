//! Hostname resolution seam used by URL validation.

use async_trait::async_trait;
use std::io;
use std::net::IpAddr;

/// Resolves a bare hostname to its network addresses.
///
/// An empty vector and an `Err` are both possible outcomes of a lookup and are
/// kept apart so callers can log them differently.
///
/// # Implementations
///
/// - [`crate::infrastructure::dns::SystemResolver`] - the platform resolver via Tokio
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    async fn resolve(&self, host: &str) -> io::Result<Vec<IpAddr>>;
}
