//! LINE Messaging API client.
//!
//! All outbound calls go through one POST helper: JSON body, bearer auth,
//! non-2xx responses logged and returned as [`ApiResponse`] so callers
//! decide how to react. Only transport-level failures surface as
//! [`GatewayError`].

use bytes::Bytes;
use serde_json::json;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::chunker::{split_text, CONTINUATION_MARKER, MAX_TEXT_CHARS, PUSH_DELAY};

pub const DEFAULT_BASE_URL: &str = "https://api.line.me";

/// Loading indicator duration when the caller does not pick one.
pub const DEFAULT_LOADING_SECONDS: u32 = 20;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, GatewayError>;

/// Status code and body of a platform response. Captured for every call,
/// success or not.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub code: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }
}

/// Client for the platform REST surface. Cheap to clone; the base URL is
/// injectable for tests.
#[derive(Clone)]
pub struct LineClient {
    http: reqwest::Client,
    channel_token: String,
    base_url: String,
}

impl LineClient {
    /// Creates a client against the production API.
    pub fn new(channel_token: impl Into<String>) -> Self {
        Self::with_base_url(channel_token, DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom base URL (tests, proxies).
    pub fn with_base_url(channel_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            channel_token: channel_token.into(),
            base_url: base_url.into(),
        }
    }

    /// Shared POST helper: JSON body, bearer auth. Non-2xx is logged but
    /// still returned as a structured response.
    async fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.channel_token)
            .json(body)
            .send()
            .await?;

        let code = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        if !(200..300).contains(&code) {
            error!(path, code, body = %body, "Platform API call failed");
        }

        Ok(ApiResponse { code, body })
    }

    /// Sends one reply against a reply token. Tokens are single-use; the
    /// platform rejects a second reply on the same token and that rejection
    /// comes back as a non-2xx [`ApiResponse`].
    pub async fn reply(&self, reply_token: &str, text: &str) -> Result<ApiResponse> {
        let body = json!({
            "replyToken": reply_token,
            "messages": [{ "type": "text", "text": text }],
        });
        self.post_json("/v2/bot/message/reply", &body).await
    }

    /// Pushes a message to a user, not tied to any inbound event.
    pub async fn push(&self, to: &str, text: &str) -> Result<ApiResponse> {
        let body = json!({
            "to": to,
            "messages": [{ "type": "text", "text": text }],
        });
        self.post_json("/v2/bot/message/push", &body).await
    }

    /// Fire-and-forget loading/typing indicator. The outcome is logged and
    /// dropped; a failed indicator never affects the caller.
    pub async fn show_loading(&self, chat_id: &str, seconds: u32) {
        let body = json!({ "chatId": chat_id, "loadingSeconds": seconds });
        match self.post_json("/v2/bot/chat/loading/start", &body).await {
            Ok(response) if response.is_success() => {}
            Ok(response) => {
                warn!(chat_id, code = response.code, "Loading indicator rejected");
            }
            Err(e) => {
                warn!(chat_id, error = %e, "Loading indicator failed");
            }
        }
    }

    /// Downloads binary content (e.g. an image) for a message id. Returns
    /// None on any failure; content retrieval is always best-effort.
    pub async fn fetch_content(&self, message_id: &str) -> Option<Bytes> {
        let url = format!("{}/v2/bot/message/{}/content", self.base_url, message_id);
        let response = match self
            .http
            .get(&url)
            .bearer_auth(&self.channel_token)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!(message_id, error = %e, "Content download failed");
                return None;
            }
        };

        if response.status().as_u16() != 200 {
            error!(
                message_id,
                code = response.status().as_u16(),
                "Content download returned non-200"
            );
            return None;
        }

        match response.bytes().await {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                error!(message_id, error = %e, "Content body read failed");
                None
            }
        }
    }

    /// Sends `text` to the user, splitting it into rate-limited chunks when
    /// it exceeds [`MAX_TEXT_CHARS`]. The first chunk goes out via the reply
    /// token when one is given (push otherwise); every later chunk is pushed
    /// with the continuation marker, pausing [`PUSH_DELAY`] between pushes.
    /// The first failure aborts the remaining sends. Returns overall
    /// success.
    pub async fn send_chunked(
        &self,
        user_id: &str,
        reply_token: Option<&str>,
        text: &str,
    ) -> bool {
        let chunks = split_text(text, MAX_TEXT_CHARS);
        let total = chunks.len();
        if total > 1 {
            info!(user_id, total, "Splitting oversized message");
        }

        for (index, chunk) in chunks.into_iter().enumerate() {
            let result = if index == 0 {
                match reply_token {
                    Some(token) => self.reply(token, &chunk).await,
                    None => self.push(user_id, &chunk).await,
                }
            } else {
                tokio::time::sleep(PUSH_DELAY).await;
                let continued = format!("{}{}", CONTINUATION_MARKER, chunk);
                self.push(user_id, &continued).await
            };

            match result {
                Ok(response) if response.is_success() => {}
                Ok(response) => {
                    error!(
                        user_id,
                        index,
                        code = response.code,
                        "Chunk rejected, aborting remaining sends"
                    );
                    return false;
                }
                Err(e) => {
                    error!(user_id, index, error = %e, "Chunk send failed, aborting remaining sends");
                    return false;
                }
            }
        }
        true
    }
}
