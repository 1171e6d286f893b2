//! Process configuration loaded from environment variables.
//! LINE_CHANNEL_TOKEN is required; the rest have defaults.

use anyhow::Result;
use std::env;

pub struct BotConfig {
    pub channel_token: String,
    pub database_url: String,
    pub bind_addr: String,
    pub log_file: Option<String>,
}

impl BotConfig {
    /// Loads from env: LINE_CHANNEL_TOKEN required; DATABASE_URL, BIND_ADDR
    /// and LOG_FILE optional. Call after dotenvy so .env applies.
    pub fn from_env() -> Result<Self> {
        let channel_token = env::var("LINE_CHANNEL_TOKEN")
            .map_err(|_| anyhow::anyhow!("LINE_CHANNEL_TOKEN not set"))?;
        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "bot.db".to_string());
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let log_file = env::var("LOG_FILE").ok();
        Ok(Self {
            channel_token,
            database_url,
            bind_addr,
            log_file,
        })
    }

    /// Builds a config with the given token and defaults for the rest.
    pub fn with_token(channel_token: String) -> Self {
        Self {
            channel_token,
            database_url: "bot.db".to_string(),
            bind_addr: "0.0.0.0:8080".to_string(),
            log_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_token() {
        let config = BotConfig::with_token("test_token".to_string());
        assert_eq!(config.channel_token, "test_token");
        assert_eq!(config.database_url, "bot.db");
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert!(config.log_file.is_none());
    }
}
