use reqwest::StatusCode;
use thiserror::Error;

/// FCM client error types.
///
/// Every failure is surfaced to the caller as soon as it happens; the
/// client never retries and never logs above debug level. Retry and
/// fallback policy belong to the caller.
#[derive(Debug, Error)]
pub enum FcmError {
    /// The server key does not have the expected length.
    #[error("invalid server key")]
    InvalidServerKey,

    /// Environment configuration is missing or malformed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The message could not be encoded as JSON.
    #[error("failed to encode message: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The HTTP request could not be constructed.
    #[error("failed to build request: {0}")]
    RequestBuild(#[source] reqwest::Error),

    /// The request could not be completed: connect failure, network
    /// error or timeout. The underlying cause is preserved as source.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a status other than 200. The body is
    /// not inspected; any non-200 status lands here.
    #[error("request failed with status {status}")]
    RequestFailed { status: StatusCode },

    /// The server answered 200 with a body that is not the JSON
    /// response envelope. FCM reports some failures as plain text, so
    /// the raw body is surfaced verbatim as the error message.
    #[error("{0}")]
    InvalidResponse(String),
}
