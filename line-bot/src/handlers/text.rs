//! Text message handler: the registration state machine.
//!
//! Every transition persists the user row before the reply goes out; there
//! is no in-memory-only transition. The read-modify-write is serialized
//! per user id through [`Services::user_lock`].

use bot_core::{render, ConversationState, InboundEvent, Result, UserProfile};
use line_api::DEFAULT_LOADING_SECONDS;
use serde_json::json;
use storage::StoredMessage;
use tracing::{info, instrument, warn};

use super::storage_err;
use crate::services::Services;
use crate::templates::{
    AGE_INVALID_TEXT, ASK_AGE_TEXT, DEFAULT_REGISTERED_TEXT, HELP_KEYWORD, HELP_TEXT,
    NAME_TOO_SHORT_TEXT, REGISTERED_TEXT, REGISTER_KEYWORD, REGISTER_START_TEXT, WELCOME_TEXT,
};

const MIN_NAME_CHARS: usize = 2;
const MIN_AGE: i64 = 1;
const MAX_AGE: i64 = 120;

#[instrument(skip(services, event))]
pub async fn handle(services: &Services, event: &InboundEvent) -> Result<()> {
    let Some(user_id) = event.user_id() else {
        warn!("Text event without user id, skipping");
        return Ok(());
    };
    let Some(message) = event.message.as_ref() else {
        return Ok(());
    };
    let text = message.text.as_deref().unwrap_or("");

    let lock = services.user_lock(user_id).await;
    let _guard = lock.lock().await;

    services
        .gateway
        .show_loading(user_id, DEFAULT_LOADING_SECONDS)
        .await;

    let record = StoredMessage::new(
        user_id,
        "text",
        &json!({ "messageId": &message.id, "text": text }),
    );
    services.messages.append(&record).await.map_err(storage_err)?;

    let mut user = match services.users.find_by_id(user_id).await.map_err(storage_err)? {
        Some(user) => user,
        None => {
            info!(user_id, "First contact, creating user");
            UserProfile::new(user_id)
        }
    };

    let before = user.state;
    let template = advance(&mut user, text);
    services.users.upsert(&user).await.map_err(storage_err)?;
    info!(
        user_id,
        from = before.as_str(),
        to = user.state.as_str(),
        "State transition persisted"
    );

    let reply = render(template, &user.attributes);
    services
        .gateway
        .send_chunked(user_id, event.reply_token.as_deref(), &reply)
        .await;
    Ok(())
}

fn is_keyword(text: &str, keyword: &str) -> bool {
    text.trim().eq_ignore_ascii_case(keyword)
}

fn parse_age(text: &str) -> Option<i64> {
    text.trim()
        .parse::<i64>()
        .ok()
        .filter(|age| (MIN_AGE..=MAX_AGE).contains(age))
}

/// Advances the state machine for one text input: mutates state and
/// attributes, returns the reply template. Total over (state, input).
pub fn advance(user: &mut UserProfile, text: &str) -> &'static str {
    match user.state {
        ConversationState::Initial => {
            if is_keyword(text, REGISTER_KEYWORD) {
                user.state = ConversationState::WaitingName;
                REGISTER_START_TEXT
            } else if is_keyword(text, HELP_KEYWORD) {
                HELP_TEXT
            } else {
                WELCOME_TEXT
            }
        }
        ConversationState::WaitingName => {
            let name = text.trim();
            if name.chars().count() < MIN_NAME_CHARS {
                NAME_TOO_SHORT_TEXT
            } else {
                user.set_attribute("name", json!(name));
                user.state = ConversationState::WaitingAge;
                ASK_AGE_TEXT
            }
        }
        ConversationState::WaitingAge => match parse_age(text) {
            Some(age) => {
                user.set_attribute("age", json!(age));
                user.state = ConversationState::Registered;
                REGISTERED_TEXT
            }
            None => AGE_INVALID_TEXT,
        },
        ConversationState::Registered => {
            if is_keyword(text, HELP_KEYWORD) {
                HELP_TEXT
            } else {
                DEFAULT_REGISTERED_TEXT
            }
        }
    }
}
