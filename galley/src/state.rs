//! Shared application state.

use std::str::FromStr;

use shared::error::{AppError, ErrorCode};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// Rows per page for list commands
    pub page_size: u32,
}

impl AppState {
    /// Open the database (WAL mode, foreign keys on) and run migrations.
    pub async fn new(config: &Config) -> Result<Self, AppError> {
        std::fs::create_dir_all(&config.data_dir).map_err(|e| {
            AppError::with_message(
                ErrorCode::ConfigError,
                format!(
                    "Failed to create data directory {}: {e}",
                    config.data_dir.display()
                ),
            )
        })?;

        let options = SqliteConnectOptions::from_str(&config.database_url)
            .map_err(|e| AppError::database(format!("Invalid database URL: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .pragma("foreign_keys", "ON");

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply migrations: {e}")))?;
        tracing::info!("Database ready at {}", config.database_url);

        Ok(Self {
            pool,
            page_size: config.page_size,
        })
    }
}
