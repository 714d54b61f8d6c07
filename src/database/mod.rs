//! SQLite-backed persistence.
//!
//! One small database under the configured data directory. The only
//! cross-session state this client keeps is the `preferences` key-value
//! table (a single slot today, the bonus-letters text).

pub mod migrations;
pub mod preferences;

pub use preferences::{PreferenceOps, BONUS_LETTERS_KEY};

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

const DATABASE_FILE: &str = "scrabble-helper.db";

/// Shared handle to the preference database.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if missing) the database under `data_dir` and run
    /// pending migrations.
    pub async fn new(data_dir: &Path) -> Result<Self, sqlx::Error> {
        std::fs::create_dir_all(data_dir).map_err(sqlx::Error::Io)?;

        let options = SqliteConnectOptions::new()
            .filename(data_dir.join(DATABASE_FILE))
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(options)
            .await?;

        migrations::run_migrations(&pool).await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
