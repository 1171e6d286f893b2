//! Reply templates and flow keywords. Templates use `{key}` placeholders
//! resolved against the user's attribute map; unknown keys stay verbatim.

/// Starts the registration flow.
pub const REGISTER_KEYWORD: &str = "register";

/// Shows usage from any settled state.
pub const HELP_KEYWORD: &str = "help";

pub const WELCOME_TEXT: &str =
    "Welcome! Send \"register\" to start registration, or \"help\" for usage.";

pub const HELP_TEXT: &str = "Commands:\n\
    register - start the registration flow\n\
    help - show this message";

pub const REGISTER_START_TEXT: &str = "Let's get you registered. What is your name?";

pub const NAME_TOO_SHORT_TEXT: &str =
    "That name is too short. Please enter at least 2 characters.";

pub const ASK_AGE_TEXT: &str = "Thanks, {name}! How old are you?";

pub const AGE_INVALID_TEXT: &str = "Please enter your age as a number between 1 and 120.";

pub const REGISTERED_TEXT: &str =
    "All done, {name}! You are registered (name: {name}, age: {age}).";

pub const DEFAULT_REGISTERED_TEXT: &str =
    "Hi {name}, you are already registered. Send \"help\" for usage.";

pub const IMAGE_ACK_TEXT: &str = "Image received, thanks!";

pub const POSTBACK_ACK_TEXT: &str = "Got it.";

/// Sent when a handler fails and a reply token is still available.
pub const GENERIC_ERROR_TEXT: &str = "Sorry, something went wrong. Please try again.";
