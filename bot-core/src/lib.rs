//! # bot-core
//!
//! Core types and helpers for the LINE bot: normalized inbound events,
//! the user model and conversation state, error taxonomy, `{placeholder}`
//! template rendering, and tracing initialization. No I/O; used by
//! storage, line-api and line-bot.

pub mod error;
pub mod event;
pub mod logger;
pub mod template;
pub mod user;

pub use error::{BotError, Result};
pub use event::{
    ContentProvider, EventKind, EventSource, InboundEvent, MessageKind, MessagePayload,
    PostbackPayload, SourceKind,
};
pub use logger::init_tracing;
pub use template::render;
pub use user::{ConversationState, UserProfile};
