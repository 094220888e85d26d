use std::env;
use std::time::Duration;

use crate::errors::FcmError;

/// Default request timeout when none is configured.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for building an [`FcmClient`](crate::FcmClient).
///
/// Can be assembled in code or loaded from the environment. The
/// endpoint override is mainly for test servers and proxies; production
/// use leaves it unset.
#[derive(Debug, Clone)]
pub struct FcmConfig {
    pub server_key: String,
    pub timeout: Duration,
    pub endpoint: Option<String>,
}

impl FcmConfig {
    /// Creates a configuration with the default timeout and no
    /// endpoint override.
    pub fn new(server_key: impl Into<String>) -> Self {
        Self {
            server_key: server_key.into(),
            timeout: DEFAULT_TIMEOUT,
            endpoint: None,
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Overrides the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Loads configuration from environment variables.
    ///
    /// `FCM_SERVER_KEY` is required and must be non-blank.
    /// `FCM_TIMEOUT_SECS` optionally sets the timeout in whole seconds,
    /// and `FCM_ENDPOINT` optionally overrides the endpoint URL.
    pub fn from_env() -> Result<Self, FcmError> {
        let server_key = env::var("FCM_SERVER_KEY")
            .map_err(|_| FcmError::Config("FCM_SERVER_KEY not set".to_string()))?;
        if server_key.trim().is_empty() {
            return Err(FcmError::Config("FCM_SERVER_KEY is empty".to_string()));
        }

        let mut config = Self::new(server_key);

        if let Ok(raw) = env::var("FCM_TIMEOUT_SECS") {
            let secs: u64 = raw.parse().map_err(|_| {
                FcmError::Config(format!("FCM_TIMEOUT_SECS is not a number: {raw}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Ok(endpoint) = env::var("FCM_ENDPOINT") {
            config.endpoint = Some(endpoint);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_set_fields() {
        let config = FcmConfig::new("some-key")
            .with_timeout(Duration::from_secs(3))
            .with_endpoint("http://localhost:9000/fcm/send");

        assert_eq!(config.server_key, "some-key");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(
            config.endpoint.as_deref(),
            Some("http://localhost:9000/fcm/send")
        );
    }

    #[test]
    fn test_defaults() {
        let config = FcmConfig::new("some-key");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.endpoint.is_none());
    }

    // Exercises every FCM_* variable in one test; env vars are process
    // global and the test harness runs tests in parallel.
    #[test]
    fn test_from_env() {
        env::remove_var("FCM_SERVER_KEY");
        env::remove_var("FCM_TIMEOUT_SECS");
        env::remove_var("FCM_ENDPOINT");

        assert!(matches!(FcmConfig::from_env(), Err(FcmError::Config(_))));

        env::set_var("FCM_SERVER_KEY", "   ");
        assert!(matches!(FcmConfig::from_env(), Err(FcmError::Config(_))));

        env::set_var("FCM_SERVER_KEY", "test_server_key_123");
        let config = FcmConfig::from_env().unwrap();
        assert_eq!(config.server_key, "test_server_key_123");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.endpoint.is_none());

        env::set_var("FCM_TIMEOUT_SECS", "not-a-number");
        assert!(matches!(FcmConfig::from_env(), Err(FcmError::Config(_))));

        env::set_var("FCM_TIMEOUT_SECS", "30");
        env::set_var("FCM_ENDPOINT", "http://localhost:9000/fcm/send");
        let config = FcmConfig::from_env().unwrap();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(
            config.endpoint.as_deref(),
            Some("http://localhost:9000/fcm/send")
        );

        env::remove_var("FCM_SERVER_KEY");
        env::remove_var("FCM_TIMEOUT_SECS");
        env::remove_var("FCM_ENDPOINT");
    }
}
