//! Postback handler: records the callback data and acknowledges.

use bot_core::{InboundEvent, Result};
use serde_json::json;
use storage::StoredMessage;
use tracing::{info, instrument, warn};

use super::storage_err;
use crate::services::Services;
use crate::templates::POSTBACK_ACK_TEXT;

#[instrument(skip(services, event))]
pub async fn handle(services: &Services, event: &InboundEvent) -> Result<()> {
    let Some(user_id) = event.user_id() else {
        warn!("Postback event without user id, skipping");
        return Ok(());
    };
    let Some(postback) = event.postback.as_ref() else {
        return Ok(());
    };

    info!(user_id, data = %postback.data, "Postback received");

    let record = StoredMessage::new(
        user_id,
        "postback",
        &json!({ "data": &postback.data, "params": &postback.params }),
    );
    services.messages.append(&record).await.map_err(storage_err)?;

    services
        .gateway
        .send_chunked(user_id, event.reply_token.as_deref(), POSTBACK_ACK_TEXT)
        .await;
    Ok(())
}
