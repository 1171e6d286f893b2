//! Message repository: append-only persistence and history queries.
//!
//! Uses SqlitePoolManager and [`StoredMessage`]. Rows are audit records:
//! insert and read only, no update or delete path.

use tracing::info;

use crate::error::StorageError;
use crate::models::StoredMessage;
use crate::sqlite_pool::SqlitePoolManager;

pub const DEFAULT_HISTORY_LIMIT: i64 = 10;

#[derive(Clone)]
pub struct MessageRepository {
    pool_manager: SqlitePoolManager,
}

impl MessageRepository {
    pub async fn new(pool_manager: SqlitePoolManager) -> Result<Self, StorageError> {
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS messages (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                kind TEXT NOT NULL,
                content TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_messages_user_id ON messages(user_id);
            CREATE INDEX IF NOT EXISTS idx_messages_created_at ON messages(created_at);
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    pub async fn append(&self, message: &StoredMessage) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            INSERT INTO messages (id, user_id, kind, content, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&message.id)
        .bind(&message.user_id)
        .bind(&message.kind)
        .bind(&message.content)
        .bind(message.created_at)
        .execute(self.pool_manager.pool())
        .await?;

        info!(
            message_id = %message.id,
            user_id = %message.user_id,
            kind = %message.kind,
            "Appended message"
        );
        Ok(())
    }

    /// Returns up to `limit` messages for the user, most recent first.
    pub async fn recent_by_user(
        &self,
        user_id: &str,
        limit: i64,
    ) -> Result<Vec<StoredMessage>, StorageError> {
        let messages: Vec<StoredMessage> = sqlx::query_as(
            "SELECT * FROM messages WHERE user_id = ? ORDER BY created_at DESC LIMIT ?",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(self.pool_manager.pool())
        .await?;

        info!(
            user_id = %user_id,
            count = messages.len(),
            "Retrieved recent messages"
        );
        Ok(messages)
    }
}
