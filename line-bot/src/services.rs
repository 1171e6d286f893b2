//! Shared service handles built once at process start and passed by
//! reference into the dispatcher and handlers. Replaces the original
//! singleton pattern with explicit construction.

use std::collections::HashMap;
use std::sync::Arc;

use line_api::LineClient;
use storage::{AuditLog, MessageRepository, SqlitePoolManager, StorageError, UserRepository};
use tokio::sync::Mutex;

/// One process-wide bundle: repositories, audit log, platform client, and
/// the per-user locks serializing read-modify-write of user rows.
pub struct Services {
    pub users: UserRepository,
    pub messages: MessageRepository,
    pub audit: AuditLog,
    pub gateway: LineClient,
    user_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl Services {
    /// Connects storage and wires the gateway client.
    pub async fn connect(database_url: &str, gateway: LineClient) -> Result<Self, StorageError> {
        let pool = SqlitePoolManager::new(database_url).await?;
        let users = UserRepository::new(pool.clone()).await?;
        let messages = MessageRepository::new(pool.clone()).await?;
        let audit = AuditLog::new(pool).await?;
        Ok(Self {
            users,
            messages,
            audit,
            gateway,
            user_locks: Mutex::new(HashMap::new()),
        })
    }

    /// Returns the lock guarding updates for one user id. Two concurrent
    /// webhook invocations for the same user take turns through this lock,
    /// closing the find-then-write race on the users table. Entries no one
    /// holds anymore (strong count 1, the map's own) are evicted on each
    /// call so the map does not grow for the process lifetime.
    pub async fn user_lock(&self, user_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.user_locks.lock().await;
        locks.retain(|_, lock| Arc::strong_count(lock) > 1);
        locks
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    #[cfg(test)]
    pub(crate) async fn user_lock_count(&self) -> usize {
        self.user_locks.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use line_api::LineClient;

    async fn test_services() -> Services {
        // Port 9 (discard) is never connected; these tests stay local.
        let gateway = LineClient::with_base_url("test-token", "http://127.0.0.1:9");
        Services::connect("sqlite::memory:", gateway)
            .await
            .expect("Failed to connect services")
    }

    #[tokio::test]
    async fn test_user_lock_is_shared_per_user() {
        let services = test_services().await;
        let a = services.user_lock("U1").await;
        let b = services.user_lock("U1").await;
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[tokio::test]
    async fn test_released_user_locks_are_evicted() {
        let services = test_services().await;

        {
            let held = services.user_lock("U1").await;
            let _guard = held.lock().await;
            // Held entries survive other users taking locks.
            let _other = services.user_lock("U2").await;
            assert_eq!(services.user_lock_count().await, 2);
        }

        // Both handles dropped; the next call prunes them.
        let _lock = services.user_lock("U3").await;
        assert_eq!(services.user_lock_count().await, 1);
    }
}
