//! Storage crate: user, message and audit-log persistence.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – StoredMessage
//! - [`user_repo`] – UserRepository (users table)
//! - [`message_repo`] – MessageRepository (messages table, append-only)
//! - [`audit_log`] – AuditLog (logs table, best-effort)
//! - [`sqlite_pool`] – SqlitePoolManager

mod audit_log;
mod error;
mod message_repo;
mod models;
mod sqlite_pool;
mod user_repo;

#[cfg(test)]
mod user_repo_test;

pub use audit_log::AuditLog;
pub use error::StorageError;
pub use message_repo::{MessageRepository, DEFAULT_HISTORY_LIMIT};
pub use models::StoredMessage;
pub use sqlite_pool::SqlitePoolManager;
pub use user_repo::UserRepository;
