//! [`HostResolver`] using `getaddrinfo` through Tokio's blocking pool.

use async_trait::async_trait;
use std::io;
use std::net::IpAddr;
use tracing::debug;

use crate::domain::resolver::HostResolver;

/// Resolver that asks the platform (`/etc/hosts`, DNS, ...) for addresses.
///
/// No caching: every call performs a fresh lookup.
#[derive(Debug, Clone, Default)]
pub struct SystemResolver;

impl SystemResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostResolver for SystemResolver {
    async fn resolve(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        // Port is required by the API but irrelevant to the lookup.
        let addrs: Vec<IpAddr> = tokio::net::lookup_host((host, 0))
            .await?
            .map(|addr| addr.ip())
            .collect();

        debug!(host, count = addrs.len(), "Resolved host");

        Ok(addrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolves_ip_literal() {
        let addrs = SystemResolver::new().resolve("127.0.0.1").await.unwrap();
        assert_eq!(addrs, vec!["127.0.0.1".parse::<IpAddr>().unwrap()]);
    }

    #[tokio::test]
    async fn test_resolves_localhost() {
        let addrs = SystemResolver::new().resolve("localhost").await.unwrap();
        assert!(!addrs.is_empty());
        assert!(addrs.iter().all(|ip| ip.is_loopback()));
    }
}
