use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
    #[error("Not found: {0}")]
    NotFound(String),
}
