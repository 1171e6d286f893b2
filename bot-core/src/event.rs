//! Normalized inbound webhook event types.
//!
//! Mirrors the platform wire shape (camelCase JSON). Unknown event or
//! message kinds fold into `Other` so one odd event never breaks a batch
//! parse; unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// Top-level webhook event kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    Message,
    Follow,
    Unfollow,
    Join,
    Leave,
    MemberJoined,
    MemberLeft,
    Postback,
    Beacon,
    AccountLink,
    Things,
    #[serde(other)]
    Other,
}

/// Kind of chat a message came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SourceKind {
    User,
    Group,
    Room,
    #[serde(other)]
    Other,
}

/// Who/where the event originated. `user_id` may be absent for group or
/// room events when the sender has not agreed to id disclosure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSource {
    #[serde(rename = "type")]
    pub kind: SourceKind,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub room_id: Option<String>,
}

/// Kind of an inbound message payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageKind {
    Text,
    Image,
    Video,
    Audio,
    File,
    Location,
    Sticker,
    #[serde(other)]
    Other,
}

/// Where binary content for a message lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentProvider {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub original_content_url: Option<String>,
    #[serde(default)]
    pub preview_image_url: Option<String>,
}

/// Message part of a `message` event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePayload {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub content_provider: Option<ContentProvider>,
}

/// Postback part of a `postback` event: raw data string plus any
/// platform-parsed params (e.g. datetime picker results).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostbackPayload {
    pub data: String,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
}

/// One normalized webhook event. Constructed per webhook call, dispatched
/// once, then discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundEvent {
    #[serde(rename = "type")]
    pub kind: EventKind,
    /// Single-use handle for one synchronous reply; absent once the reply
    /// channel is closed (e.g. redelivered events).
    #[serde(default)]
    pub reply_token: Option<String>,
    pub source: EventSource,
    /// Event time in epoch milliseconds.
    pub timestamp: i64,
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default)]
    pub message: Option<MessagePayload>,
    #[serde(default)]
    pub postback: Option<PostbackPayload>,
}

fn default_mode() -> String {
    "active".to_string()
}

impl InboundEvent {
    /// Returns the originating user id when present.
    pub fn user_id(&self) -> Option<&str> {
        self.source.user_id.as_deref()
    }
}
