//! HTTP server initialization and runtime setup.
//!
//! Wires the store, services, router, and Axum server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;

use crate::api::routes::app_router;
use crate::codegen::CodeGenerator;
use crate::config::Config;
use crate::domain::store::LinkStore;
use crate::infrastructure::persistence::{MemoryLinkStore, PgLinkStore};
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// With a `DATABASE_URL` configured, connects a PostgreSQL pool and applies
/// embedded migrations; otherwise falls back to the volatile in-memory
/// store.
///
/// # Errors
///
/// Returns an error if the database connection, migrations, or server bind
/// fail.
pub async fn run(config: Config) -> Result<()> {
    let store: Arc<dyn LinkStore> = match &config.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .connect(database_url)
                .await?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations").run(&pool).await?;

            Arc::new(PgLinkStore::new(Arc::new(pool)))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, links are kept in memory only");
            Arc::new(MemoryLinkStore::new())
        }
    };

    let state = AppState::new(store, CodeGenerator::new());
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutting down");
    }
}
