//! Event dispatcher: picks exactly one handler per inbound event and
//! isolates its failure so one bad event never aborts the rest of the
//! webhook batch.

use std::sync::Arc;

use bot_core::{EventKind, InboundEvent, MessageKind};
use tracing::{error, info, instrument};

use crate::handlers;
use crate::services::Services;
use crate::templates::GENERIC_ERROR_TEXT;

/// The fixed handler enumeration. Adding a new event kind means adding a
/// case here, not a new trait impl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    Text,
    Image,
    Postback,
    Default,
}

/// Lookup keyed on (event kind, message kind); first match wins.
pub fn select_handler(event: &InboundEvent) -> HandlerKind {
    let message_kind = event.message.as_ref().map(|m| m.kind);
    match (event.kind, message_kind) {
        (EventKind::Message, Some(MessageKind::Text)) => HandlerKind::Text,
        (EventKind::Message, Some(MessageKind::Image)) => HandlerKind::Image,
        (EventKind::Postback, _) => HandlerKind::Postback,
        _ => HandlerKind::Default,
    }
}

pub struct Dispatcher {
    services: Arc<Services>,
}

impl Dispatcher {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    /// Invokes the selected handler. A handler error is logged, written to
    /// the audit log, answered with a generic error reply when a reply
    /// token is still available, and never propagated.
    #[instrument(skip(self, event), fields(kind = ?event.kind))]
    pub async fn dispatch(&self, event: &InboundEvent) {
        let handler = select_handler(event);
        info!(handler = ?handler, user_id = ?event.user_id(), "Dispatching event");

        let result = match handler {
            HandlerKind::Text => handlers::text::handle(&self.services, event).await,
            HandlerKind::Image => handlers::image::handle(&self.services, event).await,
            HandlerKind::Postback => handlers::postback::handle(&self.services, event).await,
            HandlerKind::Default => handlers::default::handle(&self.services, event).await,
        };

        if let Err(e) = result {
            error!(handler = ?handler, error = %e, "Handler failed");
            self.services
                .audit
                .append("ERROR", &format!("handler {:?} failed: {}", handler, e))
                .await;

            send_error_reply(&self.services, event).await;
        }
    }
}

/// Best-effort generic error reply. Needs only the reply token; the source
/// user id may be absent (group/room sender without id disclosure) and is
/// logged when known.
async fn send_error_reply(services: &Services, event: &InboundEvent) {
    if let Some(token) = event.reply_token.as_deref() {
        if let Err(send_err) = services.gateway.reply(token, GENERIC_ERROR_TEXT).await {
            error!(user_id = ?event.user_id(), error = %send_err, "Error reply failed");
        }
    }
}
