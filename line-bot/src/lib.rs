//! # line-bot
//!
//! Webhook entrypoint and event processing for the LINE bot: axum routes,
//! the event dispatcher, the four event handlers (text / image / postback /
//! default) and the registration state machine realized inside the text
//! handler.

pub mod config;
pub mod dispatcher;
pub mod handlers;
pub mod services;
pub mod templates;
pub mod webhook;

pub use config::BotConfig;
pub use dispatcher::{select_handler, Dispatcher, HandlerKind};
pub use services::Services;
pub use webhook::{parse_events, router};
