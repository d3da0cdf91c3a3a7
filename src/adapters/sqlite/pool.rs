//! Pool construction and schema migrations.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::config::DatabaseConfig;

#[derive(Debug, Error)]
pub enum DatabaseSetupError {
    #[error("failed to connect to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("seeding failed: {0}")]
    Seed(#[source] sqlx::Error),
}

/// Opens a pool on the configured database, creating the file if missing.
///
/// File databases run in WAL mode so status lookups never wait on an order
/// being written. Foreign keys are enforced on every connection.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, DatabaseSetupError> {
    let connect_error = |source| DatabaseSetupError::Connect {
        url: config.url.clone(),
        source,
    };

    let mut options = SqliteConnectOptions::from_str(&config.url)
        .map_err(connect_error)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5));
    if !config.is_in_memory() {
        options = options.journal_mode(SqliteJournalMode::Wal);
    }

    let mut pool_options = SqlitePoolOptions::new()
        .max_connections(config.effective_max_connections())
        .acquire_timeout(config.acquire_timeout());
    if config.is_in_memory() {
        // Closing the only connection would drop the database.
        pool_options = pool_options.idle_timeout(None).max_lifetime(None);
    }

    let pool = pool_options
        .connect_with(options)
        .await
        .map_err(connect_error)?;

    tracing::info!(
        url = %config.url,
        max_connections = config.effective_max_connections(),
        "Database pool ready"
    );
    Ok(pool)
}

/// Applies the bundled migrations.
pub async fn migrate(pool: &SqlitePool) -> Result<(), DatabaseSetupError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}
