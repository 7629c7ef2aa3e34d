//! `SQLite` connection setup for the restaurants store.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use crate::error::StorageError;
use crate::restaurant_repo::SqliteRestaurantRepository;

/// Configuration for the `SQLite` storage adapter.
pub struct Config {
    /// `SQLite` connection URL (`sqlite:eatery.db`, `sqlite::memory:`) or a
    /// bare file path such as `data/eatery.db`.
    pub database_url: String,
}

impl Config {
    /// Open the database, creating the file if missing, and bring the
    /// `restaurants` table up to date.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection or migrations fail.
    pub async fn build(self) -> Result<Database, StorageError> {
        let url = connection_url(&self.database_url);
        let options = SqliteConnectOptions::from_str(&url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::debug!(url = %self.database_url, "restaurants schema ready");

        Ok(Database { pool })
    }
}

fn connection_url(raw: &str) -> String {
    if raw.starts_with("sqlite:") {
        raw.to_string()
    } else {
        format!("sqlite:{raw}")
    }
}

/// Migrated restaurants database.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Repository over this database's `restaurants` table.
    #[must_use]
    pub fn restaurants(&self) -> SqliteRestaurantRepository {
        SqliteRestaurantRepository::new(self.pool.clone())
    }

    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
