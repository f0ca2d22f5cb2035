//! Database Module
//!
//! PostgreSQL connection pool and migration utilities.

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;

use crate::config::DatabaseSettings;

/// Create a PostgreSQL connection pool.
///
/// Connections are health-checked before being handed out
/// (`test_before_acquire`), so stale connections from a restarted or
/// failed-over database are detected rather than surfaced to a request.
/// TLS with full certificate verification is required unless
/// `require_ssl` is disabled for local development.
pub async fn create_pool(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let ssl_mode = if settings.require_ssl {
        PgSslMode::VerifyFull
    } else {
        PgSslMode::Prefer
    };

    let options = PgConnectOptions::from_str(settings.connection_url())?.ssl_mode(ssl_mode);

    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout))
        .test_before_acquire(true)
        .connect_with(options)
        .await
}

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
