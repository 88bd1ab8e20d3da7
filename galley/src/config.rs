//! CLI configuration loaded from environment variables.

use std::path::PathBuf;

use shared::query::DEFAULT_PAGE_SIZE;

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the database file and logs (env: GALLEY_DATA_DIR)
    pub data_dir: PathBuf,
    /// SQLite connection URL (env: DATABASE_URL, derived from data_dir when unset)
    pub database_url: String,
    /// Rows per page for list commands (env: GALLEY_PAGE_SIZE)
    pub page_size: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable has a default, so loading never fails; a missing
    /// DATABASE_URL points at `<data_dir>/galley.db`.
    pub fn from_env() -> Self {
        let data_dir = std::env::var("GALLEY_DATA_DIR")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./data"));

        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| format!("sqlite://{}", data_dir.join("galley.db").display()));

        let page_size = std::env::var("GALLEY_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .max(1);

        Self {
            data_dir,
            database_url,
            page_size,
        }
    }

    /// Directory receiving the daily-rotated log files.
    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}
