use britpass_core::model::Progress;
use chrono::Utc;
use sqlx::Row;

use super::SqliteRepository;
use crate::repository::{ProgressRepository, StorageError};

/// Name of the single record holding the serialized progress structure.
const PROGRESS_KEY: &str = "progress";

#[async_trait::async_trait]
impl ProgressRepository for SqliteRepository {
    async fn load_progress(&self) -> Result<Option<Progress>, StorageError> {
        let row = sqlx::query("SELECT value FROM progress_store WHERE key = ?1")
            .bind(PROGRESS_KEY)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let value: String = row
            .try_get("value")
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        // A payload that no longer parses is treated as absent; the caller
        // starts from empty progress rather than refusing to launch.
        Ok(serde_json::from_str(&value).ok())
    }

    async fn save_progress(&self, progress: &Progress) -> Result<(), StorageError> {
        let value = serde_json::to_string(progress)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        sqlx::query(
            r"
                INSERT INTO progress_store (key, value, updated_at)
                VALUES (?1, ?2, ?3)
                ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at
            ",
        )
        .bind(PROGRESS_KEY)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(())
    }
}
