//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, migrations, and the Axum server lifecycle.

use crate::application::services::{LinkService, UrlValidator};
use crate::config::Config;
use crate::domain::repositories::ShortLinkRepository;
use crate::infrastructure::dns::SystemResolver;
use crate::infrastructure::persistence::{InMemoryShortLinkRepository, PgShortLinkRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Opens the PostgreSQL pool using the pool settings from `config`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect_pool(config: &Config, database_url: &str) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .context("Failed to connect to database")
}

/// Builds the store selected by `config` and runs migrations when it is PostgreSQL.
///
/// Returns the repository and a short name for health reporting.
///
/// # Errors
///
/// Returns an error if the database is unreachable or migrations fail.
pub async fn build_repository(
    config: &Config,
) -> Result<(Arc<dyn ShortLinkRepository>, &'static str)> {
    match &config.database_url {
        Some(database_url) => {
            let pool = connect_pool(config, database_url).await?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;
            tracing::info!("Migrations applied");

            let repository: Arc<dyn ShortLinkRepository> =
                Arc::new(PgShortLinkRepository::new(Arc::new(pool)));
            Ok((repository, "postgres"))
        }
        None => {
            tracing::warn!("No database configured, using in-memory store");
            let repository: Arc<dyn ShortLinkRepository> =
                Arc::new(InMemoryShortLinkRepository::new());
            Ok((repository, "memory"))
        }
    }
}

/// Builds the link service on top of `repository` with the system resolver.
pub fn build_link_service(
    config: &Config,
    repository: Arc<dyn ShortLinkRepository>,
) -> LinkService {
    let validator = UrlValidator::new(Arc::new(SystemResolver::new()), config.dns_timeout());
    LinkService::new(repository, validator)
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL pool and migrations (or the in-memory store)
/// - URL validator backed by the system resolver
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let (repository, store_kind) = build_repository(&config).await?;
    let link_service = Arc::new(build_link_service(&config, repository));

    let state = AppState::new(link_service, store_kind);

    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves when the process receives Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
