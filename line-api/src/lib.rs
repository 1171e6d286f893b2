//! # line-api
//!
//! Client for the LINE Messaging API: single replies and pushes, chunked
//! delivery of oversized texts under the push-rate limit, the chat loading
//! indicator, and binary content download. Non-2xx responses are captured
//! as [`ApiResponse`] values, never raised; only transport failures are
//! errors.

mod chunker;
mod client;

pub use chunker::{split_text, CONTINUATION_MARKER, MAX_TEXT_CHARS, PUSH_DELAY};
pub use client::{ApiResponse, GatewayError, LineClient, DEFAULT_BASE_URL, DEFAULT_LOADING_SECONDS};
