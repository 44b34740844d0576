//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, migrations, worker spawning, and Axum server lifecycle.

use crate::config::{Config, StoreBackend};
use crate::domain::click_worker::run_click_worker;
use crate::domain::repositories::{ClickRepository, MappingRepository};
use crate::infrastructure::persistence::{
    MemoryClickRepository, MemoryMappingRepository, PgClickRepository, PgMappingRepository,
};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::RandomCodeGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The mapping store (PostgreSQL pool + migrations, or in-memory)
/// - Background click worker
/// - Axum HTTP server with graceful shutdown on ctrl-c
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let (mappings, clicks) = build_store(&config).await?;

    let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);

    tokio::spawn(run_click_worker(click_rx, clicks));
    tracing::info!("Click worker started");

    let state = AppState::new(mappings, Arc::new(RandomCodeGenerator), click_tx);

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Builds the repository pair for the configured store backend.
async fn build_store(
    config: &Config,
) -> Result<(Arc<dyn MappingRepository>, Arc<dyn ClickRepository>)> {
    match config.store_backend {
        StoreBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .context("database URL missing for the postgres backend")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .idle_timeout(Duration::from_secs(config.db_idle_timeout))
                .max_lifetime(Duration::from_secs(config.db_max_lifetime))
                .connect(url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;

            let pool = Arc::new(pool);
            Ok((
                Arc::new(PgMappingRepository::new(Arc::clone(&pool))),
                Arc::new(PgClickRepository::new(pool)),
            ))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store: mappings will not survive a restart");
            Ok((
                Arc::new(MemoryMappingRepository::new()),
                Arc::new(MemoryClickRepository::new()),
            ))
        }
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {e}"),
    }
}
