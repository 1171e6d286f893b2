//! User model: conversation state and the per-user profile advanced by the
//! registration flow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Where a user is in the registration flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConversationState {
    Initial,
    WaitingName,
    WaitingAge,
    Registered,
}

impl ConversationState {
    /// Stable string form used in the users table.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationState::Initial => "INITIAL",
            ConversationState::WaitingName => "WAITING_NAME",
            ConversationState::WaitingAge => "WAITING_AGE",
            ConversationState::Registered => "REGISTERED",
        }
    }

    /// Parses the stored string form; unknown values fall back to Initial
    /// so a corrupt row degrades to the start of the flow instead of
    /// failing the handler.
    pub fn parse(s: &str) -> Self {
        match s {
            "WAITING_NAME" => ConversationState::WaitingName,
            "WAITING_AGE" => ConversationState::WaitingAge,
            "REGISTERED" => ConversationState::Registered,
            _ => ConversationState::Initial,
        }
    }
}

/// One user of the bot. `attributes` is an open key/value map collected
/// during the flow (name, age); it is merged on update, never replaced.
/// `updated_at` stays None until the first update after insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub display_name: Option<String>,
    pub state: ConversationState,
    pub attributes: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    /// Creates a fresh profile in the Initial state with no attributes.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: None,
            state: ConversationState::Initial,
            attributes: Map::new(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Merges one attribute into the map (existing keys are overwritten,
    /// other keys kept).
    pub fn set_attribute(&mut self, key: impl Into<String>, value: Value) {
        self.attributes.insert(key.into(), value);
    }

    /// Returns an attribute stringified for template substitution.
    pub fn attribute_text(&self, key: &str) -> Option<String> {
        self.attributes.get(key).map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_round_trip() {
        for state in [
            ConversationState::Initial,
            ConversationState::WaitingName,
            ConversationState::WaitingAge,
            ConversationState::Registered,
        ] {
            assert_eq!(ConversationState::parse(state.as_str()), state);
        }
    }

    #[test]
    fn test_unknown_state_falls_back_to_initial() {
        assert_eq!(
            ConversationState::parse("SOMETHING_ELSE"),
            ConversationState::Initial
        );
    }

    #[test]
    fn test_attribute_merge_keeps_other_keys() {
        let mut user = UserProfile::new("U1");
        user.set_attribute("name", Value::String("Al".into()));
        user.set_attribute("age", Value::from(30));
        user.set_attribute("name", Value::String("Bo".into()));

        assert_eq!(user.attribute_text("name").as_deref(), Some("Bo"));
        assert_eq!(user.attribute_text("age").as_deref(), Some("30"));
    }
}
