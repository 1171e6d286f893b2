use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Gateway error: {0}")]
    Gateway(String),

    #[error("Handler error: {0}")]
    Handler(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type Result<T> = std::result::Result<T, BotError>;
