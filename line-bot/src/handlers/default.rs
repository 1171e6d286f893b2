//! Fallback handler for event kinds the bot has no specific behavior for
//! (follow/unfollow/join/..., unknown kinds, non-text/image messages).
//! Logs the event and leaves any reply token unused.

use bot_core::{InboundEvent, Result};
use tracing::{info, instrument};

use crate::services::Services;

#[instrument(skip(services, event))]
pub async fn handle(services: &Services, event: &InboundEvent) -> Result<()> {
    info!(
        kind = ?event.kind,
        user_id = ?event.user_id(),
        "Unhandled event kind, ignoring"
    );
    services
        .audit
        .append("INFO", &format!("unhandled event kind {:?}", event.kind))
        .await;
    Ok(())
}
