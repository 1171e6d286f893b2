//! Best-effort audit log backed by the `logs` table.
//!
//! Append failures are swallowed: a broken log sink must never take down
//! the main message flow. Failures still reach the tracing output.

use chrono::Utc;
use tracing::warn;

use crate::error::StorageError;
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct AuditLog {
    pool_manager: SqlitePoolManager,
}

impl AuditLog {
    pub async fn new(pool_manager: SqlitePoolManager) -> Result<Self, StorageError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS logs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                created_at TEXT NOT NULL,
                level TEXT NOT NULL,
                message TEXT NOT NULL
            )
            "#,
        )
        .execute(pool_manager.pool())
        .await?;
        Ok(Self { pool_manager })
    }

    /// Appends one log row. Never returns an error; on failure the row is
    /// dropped and a warning goes to the tracing fallback sink.
    pub async fn append(&self, level: &str, text: &str) {
        let result = sqlx::query("INSERT INTO logs (created_at, level, message) VALUES (?, ?, ?)")
            .bind(Utc::now())
            .bind(level)
            .bind(text)
            .execute(self.pool_manager.pool())
            .await;

        if let Err(e) = result {
            warn!(error = %e, level, text, "Audit log write failed, entry dropped");
        }
    }
}
