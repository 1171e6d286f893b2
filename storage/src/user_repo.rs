//! User repository: persistence for per-user conversation state.
//!
//! Uses SqlitePoolManager; rows are keyed by the platform user id. The
//! upsert is a single atomic statement so a concurrent writer cannot see a
//! half-written row; the read-modify-write around it is serialized per
//! user by the caller.

use bot_core::{ConversationState, UserProfile};
use chrono::{DateTime, Utc};
use sqlx::Row;
use tracing::info;

use crate::error::StorageError;
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct UserRepository {
    pool_manager: SqlitePoolManager,
}

impl UserRepository {
    pub async fn new(pool_manager: SqlitePoolManager) -> Result<Self, StorageError> {
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                user_id TEXT PRIMARY KEY,
                display_name TEXT,
                state TEXT NOT NULL,
                attributes TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT
            )
            "#,
        )
        .execute(self.pool_manager.pool())
        .await?;
        Ok(())
    }

    /// Inserts the user if absent, else overwrites the row's fields.
    /// `updated_at` is stamped on overwrite only; a first insert leaves it
    /// NULL (the original system behaved this way and callers tolerate the
    /// absent value).
    pub async fn upsert(&self, user: &UserProfile) -> Result<(), StorageError> {
        let attributes = serde_json::to_string(&user.attributes)?;

        sqlx::query(
            r#"
            INSERT INTO users (user_id, display_name, state, attributes, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, NULL)
            ON CONFLICT(user_id) DO UPDATE SET
                display_name = excluded.display_name,
                state = excluded.state,
                attributes = excluded.attributes,
                updated_at = ?
            "#,
        )
        .bind(&user.user_id)
        .bind(&user.display_name)
        .bind(user.state.as_str())
        .bind(&attributes)
        .bind(user.created_at)
        .bind(Utc::now())
        .execute(self.pool_manager.pool())
        .await?;

        info!(user_id = %user.user_id, state = user.state.as_str(), "Saved user");
        Ok(())
    }

    pub async fn find_by_id(&self, user_id: &str) -> Result<Option<UserProfile>, StorageError> {
        let row = sqlx::query(
            "SELECT user_id, display_name, state, attributes, created_at, updated_at \
             FROM users WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(self.pool_manager.pool())
        .await?;

        match row {
            Some(row) => {
                let state: String = row.try_get("state")?;
                let attributes: String = row.try_get("attributes")?;
                let created_at: DateTime<Utc> = row.try_get("created_at")?;
                let updated_at: Option<DateTime<Utc>> = row.try_get("updated_at")?;
                Ok(Some(UserProfile {
                    user_id: row.try_get("user_id")?,
                    display_name: row.try_get("display_name")?,
                    state: ConversationState::parse(&state),
                    attributes: serde_json::from_str(&attributes)?,
                    created_at,
                    updated_at,
                }))
            }
            None => Ok(None),
        }
    }
}
