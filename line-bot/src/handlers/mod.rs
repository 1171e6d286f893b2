//! The four event handlers. Exactly one runs per inbound event, chosen by
//! [`crate::dispatcher::select_handler`].

pub mod default;
pub mod image;
pub mod postback;
pub mod text;

use bot_core::BotError;
use storage::StorageError;

/// Storage failures are fatal to the current handler invocation and
/// propagate to the dispatcher.
pub(crate) fn storage_err(e: StorageError) -> BotError {
    BotError::Storage(e.to_string())
}
