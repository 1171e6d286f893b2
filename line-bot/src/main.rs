//! Process entrypoint: load env, init tracing, build the services once,
//! and serve the webhook.

use std::sync::Arc;

use anyhow::Result;
use line_api::LineClient;
use line_bot::{router, BotConfig, Dispatcher, Services};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = BotConfig::from_env()?;
    bot_core::init_tracing(config.log_file.as_deref())?;

    let gateway = LineClient::new(config.channel_token.clone());
    let services = Arc::new(Services::connect(&config.database_url, gateway).await?);
    let dispatcher = Arc::new(Dispatcher::new(services));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "Listening for webhooks");
    axum::serve(listener, router(dispatcher)).await?;
    Ok(())
}
