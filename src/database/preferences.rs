//! Preference storage
//!
//! This module provides key-value preference storage. The search form
//! persists its bonus-letters field here so it survives across sessions.
//! Writes from concurrent processes are last-writer-wins; the single slot
//! makes that benign.

use super::Database;
use sqlx::Row;

/// Key under which the bonus-letters text is stored.
pub const BONUS_LETTERS_KEY: &str = "bonus_letters";

/// Extension trait for preference database operations
pub trait PreferenceOps {
    fn get_preference(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, sqlx::Error>> + Send;
    fn set_preference(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<(), sqlx::Error>> + Send;
    fn delete_preference(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<(), sqlx::Error>> + Send;

    /// The stored bonus-letters text, or the empty string when absent.
    fn load_bonus_letters(
        &self,
    ) -> impl std::future::Future<Output = Result<String, sqlx::Error>> + Send;

    /// Persist the bonus-letters text. An empty or whitespace-only value
    /// erases the entry entirely: absence is the sentinel, a fresh session
    /// must not find a leftover empty marker.
    fn save_bonus_letters(
        &self,
        value: &str,
    ) -> impl std::future::Future<Output = Result<(), sqlx::Error>> + Send;
}

impl PreferenceOps for Database {
    async fn get_preference(&self, key: &str) -> Result<Option<String>, sqlx::Error> {
        let row = sqlx::query("SELECT value FROM preferences WHERE key = ?")
            .bind(key)
            .fetch_optional(self.pool())
            .await?;

        Ok(row.map(|r| r.get("value")))
    }

    async fn set_preference(&self, key: &str, value: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT OR REPLACE INTO preferences (key, value, updated_at) VALUES (?, ?, datetime('now'))",
        )
        .bind(key)
        .bind(value)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    async fn delete_preference(&self, key: &str) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM preferences WHERE key = ?")
            .bind(key)
            .execute(self.pool())
            .await?;
        Ok(())
    }

    async fn load_bonus_letters(&self) -> Result<String, sqlx::Error> {
        Ok(self
            .get_preference(BONUS_LETTERS_KEY)
            .await?
            .unwrap_or_default())
    }

    async fn save_bonus_letters(&self, value: &str) -> Result<(), sqlx::Error> {
        if value.trim().is_empty() {
            self.delete_preference(BONUS_LETTERS_KEY).await
        } else {
            self.set_preference(BONUS_LETTERS_KEY, value).await
        }
    }
}
