//! Stored message model for persistence.
//!
//! Maps to the `messages` table and is used by MessageRepository. Rows are
//! append-only audit records, never mutated or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct StoredMessage {
    pub id: String,
    pub user_id: String,
    /// text / image / postback.
    pub kind: String,
    /// Kind-dependent payload, JSON-encoded.
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl StoredMessage {
    /// Creates a new record with a generated UUID and current timestamp.
    pub fn new(user_id: impl Into<String>, kind: impl Into<String>, content: &serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            kind: kind.into(),
            content: content.to_string(),
            created_at: Utc::now(),
        }
    }

    /// Decodes the JSON payload.
    pub fn content_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.content)
    }
}
