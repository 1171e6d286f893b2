//! Image message handler: downloads the attachment (best-effort), records
//! the message, and acknowledges.

use bot_core::{InboundEvent, Result};
use serde_json::json;
use storage::StoredMessage;
use tracing::{info, instrument, warn};

use super::storage_err;
use crate::services::Services;
use crate::templates::IMAGE_ACK_TEXT;

#[instrument(skip(services, event))]
pub async fn handle(services: &Services, event: &InboundEvent) -> Result<()> {
    let Some(user_id) = event.user_id() else {
        warn!("Image event without user id, skipping");
        return Ok(());
    };
    let Some(message) = event.message.as_ref() else {
        return Ok(());
    };

    // Content download is best-effort: a missing blob still gets a record
    // and an acknowledgement.
    let content = services.gateway.fetch_content(&message.id).await;
    let size = content.as_ref().map(|bytes| bytes.len());
    info!(user_id, message_id = %message.id, size = ?size, "Image received");

    let record = StoredMessage::new(
        user_id,
        "image",
        &json!({
            "messageId": &message.id,
            "contentBytes": size,
            "contentProvider": &message.content_provider,
        }),
    );
    services.messages.append(&record).await.map_err(storage_err)?;

    services
        .gateway
        .send_chunked(user_id, event.reply_token.as_deref(), IMAGE_ACK_TEXT)
        .await;
    Ok(())
}
