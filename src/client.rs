use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use tracing::debug;

use crate::config::FcmConfig;
use crate::errors::FcmError;
use crate::models::{Message, Response};

/// Production endpoint of the FCM legacy HTTP API.
pub const ENDPOINT: &str = "https://fcm.googleapis.com/fcm/send";

/// Expected server key length in bytes.
const SERVER_KEY_LEN: usize = 39;

/// Firebase Cloud Messaging client for the legacy HTTP API.
///
/// Holds the server key and a shared HTTP transport; construct it once
/// and reuse it. All state is read-only after construction, so a single
/// client (behind an `Arc` if needed) is safe to use from concurrent
/// tasks.
pub struct FcmClient {
    server_key: String,
    endpoint: String,
    http: reqwest::Client,
}

impl FcmClient {
    /// Creates a client bound to the production endpoint.
    ///
    /// The server key must be exactly 39 characters; its content is not
    /// inspected. `timeout` bounds the whole exchange (connect, send
    /// and receive). No network traffic happens here.
    pub fn new(server_key: impl Into<String>, timeout: Duration) -> Result<Self, FcmError> {
        Self::with_endpoint(server_key, ENDPOINT, timeout)
    }

    /// Creates a client that posts to `endpoint` instead of the
    /// production URL. Useful for test servers and proxies. A
    /// malformed endpoint is reported by [`send`](Self::send) as
    /// [`FcmError::RequestBuild`].
    pub fn with_endpoint(
        server_key: impl Into<String>,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, FcmError> {
        let server_key = server_key.into();
        if server_key.len() != SERVER_KEY_LEN {
            return Err(FcmError::InvalidServerKey);
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FcmError::RequestBuild)?;

        Ok(Self {
            server_key,
            endpoint: endpoint.into(),
            http,
        })
    }

    /// Creates a client from an [`FcmConfig`], applying its endpoint
    /// override when present.
    pub fn from_config(config: &FcmConfig) -> Result<Self, FcmError> {
        match &config.endpoint {
            Some(endpoint) => {
                Self::with_endpoint(config.server_key.clone(), endpoint.as_str(), config.timeout)
            }
            None => Self::new(config.server_key.clone(), config.timeout),
        }
    }

    /// Sends one message and returns the decoded server response.
    ///
    /// A single HTTP POST per call, no retries. Any status other than
    /// 200 is reported as [`FcmError::RequestFailed`] without reading
    /// into the body; a 200 whose body is not the JSON envelope is
    /// reported as [`FcmError::InvalidResponse`] carrying the raw body
    /// text.
    pub async fn send(&self, message: &Message) -> Result<Response, FcmError> {
        let body = serde_json::to_vec(message)?;

        let request = self
            .http
            .post(self.endpoint.as_str())
            .header(AUTHORIZATION, format!("key={}", self.server_key))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .build()
            .map_err(FcmError::RequestBuild)?;

        debug!(endpoint = %self.endpoint, "sending FCM message");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(FcmError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!(%status, "FCM request rejected");
            // Drain the body so the connection can go back to the pool.
            let _ = response.bytes().await;
            return Err(FcmError::RequestFailed { status });
        }

        // Keep the raw bytes around: on a decode failure the body is a
        // plain-text error from the server and becomes the message.
        let raw = response.bytes().await.map_err(FcmError::Transport)?;
        match serde_json::from_slice(&raw) {
            Ok(decoded) => Ok(decoded),
            Err(_) => Err(FcmError::InvalidResponse(
                String::from_utf8_lossy(&raw).into_owned(),
            )),
        }
    }
}
