//! PostgreSQL repository tests.
//!
//! Run with a database: `DATABASE_URL=postgres://... cargo test -- --ignored`

mod common;

use sqlx::PgPool;
use std::sync::Arc;
use shorturl::domain::repositories::ShortLinkRepository;
use shorturl::error::StoreError;
use shorturl::infrastructure::persistence::PgShortLinkRepository;

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_create_next_starts_at_one(pool: PgPool) {
    let repo = PgShortLinkRepository::new(Arc::new(pool));

    let first = repo.create_next("https://www.example.com/page").await.unwrap();
    let second = repo.create_next("https://example.com").await.unwrap();

    assert_eq!(first.short_url, 1);
    assert_eq!(first.original_url, "https://www.example.com/page");
    assert_eq!(second.short_url, 2);
    assert_eq!(repo.count().await.unwrap(), 2);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_find_by_short_url(pool: PgPool) {
    common::insert_test_link(&pool, "https://example.com/a", 1).await;
    let repo = PgShortLinkRepository::new(Arc::new(pool));

    let link = repo.find_by_short_url(1).await.unwrap().unwrap();
    assert_eq!(link.original_url, "https://example.com/a");

    assert!(repo.find_by_short_url(99).await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_find_by_original_url_is_exact(pool: PgPool) {
    common::insert_test_link(&pool, "https://example.com/", 1).await;
    let repo = PgShortLinkRepository::new(Arc::new(pool));

    assert!(
        repo.find_by_original_url("https://example.com/")
            .await
            .unwrap()
            .is_some()
    );
    assert!(
        repo.find_by_original_url("https://example.com")
            .await
            .unwrap()
            .is_none()
    );
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_create_next_reports_taken_code(pool: PgPool) {
    // Count is 1 but code 2 is already used, so count + 1 collides.
    common::insert_test_link(&pool, "https://example.com/other", 2).await;
    let repo = PgShortLinkRepository::new(Arc::new(pool));

    let result = repo.create_next("https://example.com/new").await;

    assert!(matches!(result, Err(StoreError::CodeTaken(2))));
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_create_next_reports_duplicate_url(pool: PgPool) {
    common::insert_test_link(&pool, "https://example.com", 1).await;
    let repo = PgShortLinkRepository::new(Arc::new(pool));

    let result = repo.create_next("https://example.com").await;

    assert!(matches!(result, Err(StoreError::DuplicateUrl)));
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_list_orders_by_code(pool: PgPool) {
    common::insert_test_link(&pool, "https://example.com/3", 3).await;
    common::insert_test_link(&pool, "https://example.com/1", 1).await;
    common::insert_test_link(&pool, "https://example.com/2", 2).await;
    let repo = PgShortLinkRepository::new(Arc::new(pool));

    let page = repo.list(1, 2).await.unwrap();

    assert_eq!(
        page.iter().map(|l| l.short_url).collect::<Vec<_>>(),
        vec![1, 2]
    );
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_list_far_page_is_empty(pool: PgPool) {
    common::insert_test_link(&pool, "https://example.com/1", 1).await;
    let repo = PgShortLinkRepository::new(Arc::new(pool));

    assert!(repo.list(i64::MAX, 1000).await.unwrap().is_empty());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_concurrent_create_next_gets_consecutive_codes(pool: PgPool) {
    let repo = Arc::new(PgShortLinkRepository::new(Arc::new(pool)));

    let handles: Vec<_> = (0..12)
        .map(|i| {
            let repo = repo.clone();
            tokio::spawn(async move {
                repo.create_next(&format!("https://example.com/{i}")).await
            })
        })
        .collect();

    let mut codes = Vec::new();
    for handle in handles {
        codes.push(handle.await.unwrap().unwrap().short_url);
    }
    codes.sort_unstable();

    assert_eq!(codes, (1..=12).collect::<Vec<i64>>());
}
