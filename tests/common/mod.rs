#![allow(dead_code)]

use async_trait::async_trait;
use shorturl::application::services::{LinkService, UrlValidator};
use shorturl::domain::repositories::ShortLinkRepository;
use shorturl::domain::resolver::HostResolver;
use shorturl::infrastructure::persistence::InMemoryShortLinkRepository;
use shorturl::state::AppState;
use sqlx::PgPool;
use std::collections::HashSet;
use std::io;
use std::net::IpAddr;
use std::sync::Arc;

/// Resolver that answers from a fixed host list instead of the network.
pub struct StaticResolver {
    hosts: HashSet<String>,
}

impl StaticResolver {
    pub fn new(hosts: &[&str]) -> Self {
        Self {
            hosts: hosts.iter().map(|h| h.to_string()).collect(),
        }
    }
}

#[async_trait]
impl HostResolver for StaticResolver {
    async fn resolve(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        if self.hosts.contains(host) {
            Ok(vec!["93.184.216.34".parse().unwrap()])
        } else {
            Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("failed to lookup address information: {host}"),
            ))
        }
    }
}

pub const KNOWN_HOSTS: &[&str] = &["www.example.com", "example.com", "rust-lang.org"];

pub fn create_test_state_with(repository: Arc<dyn ShortLinkRepository>) -> AppState {
    let validator = UrlValidator::new(Arc::new(StaticResolver::new(KNOWN_HOSTS)), None);
    let link_service = Arc::new(LinkService::new(repository, validator));

    AppState::new(link_service, "memory")
}

pub fn create_test_state() -> (AppState, Arc<InMemoryShortLinkRepository>) {
    let repository = Arc::new(InMemoryShortLinkRepository::new());
    let state = create_test_state_with(repository.clone());

    (state, repository)
}

pub async fn insert_test_link(pool: &PgPool, original_url: &str, short_url: i64) {
    sqlx::query("INSERT INTO short_links (original_url, short_url) VALUES ($1, $2)")
        .bind(original_url)
        .bind(short_url)
        .execute(pool)
        .await
        .unwrap();
}
