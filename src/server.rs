//! HTTP server initialization and runtime setup.
//!
//! Handles database connection, migrations, and the Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::persistence::SqliteAlbumRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool
/// - Embedded schema migrations
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied");

    let albums = Arc::new(SqliteAlbumRepository::new(pool));
    let state = AppState::new(albums);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
