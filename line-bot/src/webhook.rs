//! Webhook entrypoint: axum routes for the platform callback and liveness.
//!
//! The webhook always answers 200: an unparseable body yields an empty
//! event list, and per-event failures are contained inside the dispatcher.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use bot_core::InboundEvent;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::dispatcher::Dispatcher;

pub const VERSION: &str = "1.0.0";

#[derive(Debug, Deserialize)]
struct WebhookPayload {
    #[serde(default)]
    events: Vec<InboundEvent>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub version: &'static str,
}

/// Parses the webhook body into events. Absent or malformed JSON yields an
/// empty list; the transport never sees a parse error.
pub fn parse_events(body: &str) -> Vec<InboundEvent> {
    match serde_json::from_str::<WebhookPayload>(body) {
        Ok(payload) => payload.events,
        Err(e) => {
            warn!(error = %e, "Webhook body did not parse, treating as empty");
            Vec::new()
        }
    }
}

async fn webhook(State(dispatcher): State<Arc<Dispatcher>>, body: String) -> StatusCode {
    let events = parse_events(&body);
    info!(count = events.len(), "Webhook batch received");

    // Sequential, per the platform's single-invocation model; isolation of
    // one event's failure lives in dispatch.
    for event in &events {
        dispatcher.dispatch(event).await;
    }

    StatusCode::OK
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "line-bot is running",
        version: VERSION,
    })
}

/// Builds the application router.
pub fn router(dispatcher: Arc<Dispatcher>) -> Router {
    Router::new()
        .route("/webhook", post(webhook))
        .route("/health", get(health))
        .with_state(dispatcher)
}
