//! DashScope client configuration.

use std::fmt;
use std::time::Duration;

use yukang_common::defaults::{
    DEFAULT_API_KEY_ENV, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_ENDPOINT, DEFAULT_MODEL,
    DEFAULT_RESULT_FORMAT, DEFAULT_TIMEOUT_SECS,
};

/// DashScope client configuration.
#[derive(Clone)]
pub struct DashScopeConfig {
    /// Bearer credential. `None` means requests fail fast without touching
    /// the network.
    pub api_key: Option<String>,
    /// Where the credential was expected to come from, for user guidance.
    pub api_key_env: String,
    pub endpoint: String,
    pub model: String,
    pub result_format: String,
    /// `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub connect_timeout: Duration,
}

impl fmt::Debug for DashScopeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashScopeConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_key_env", &self.api_key_env)
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("result_format", &self.result_format)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

impl DashScopeConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_optional_key(Some(api_key.into()), DEFAULT_API_KEY_ENV)
    }

    /// Read the credential from the environment variable `var`.
    ///
    /// An unset or blank variable is not an error here; the client reports
    /// it when a request is attempted.
    pub fn from_env(var: &str) -> Self {
        let api_key = std::env::var(var).ok();
        Self::with_optional_key(api_key, var)
    }

    fn with_optional_key(api_key: Option<String>, api_key_env: &str) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            api_key_env: api_key_env.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            result_format: DEFAULT_RESULT_FORMAT.to_string(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS.into())),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS.into()),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_result_format(mut self, result_format: impl Into<String>) -> Self {
        self.result_format = result_format.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_key() {
        let config = DashScopeConfig::new("sk-very-secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-very-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let config = DashScopeConfig::new("   ");
        assert!(!config.has_credential());
    }

    #[test]
    fn from_env_reads_named_variable() {
        std::env::set_var("YUKANG_TEST_DASHSCOPE_KEY_SET", "sk-from-env");
        let config = DashScopeConfig::from_env("YUKANG_TEST_DASHSCOPE_KEY_SET");
        assert_eq!(config.api_key.as_deref(), Some("sk-from-env"));
        assert_eq!(config.api_key_env, "YUKANG_TEST_DASHSCOPE_KEY_SET");
    }

    #[test]
    fn from_env_without_variable_has_no_credential() {
        let config = DashScopeConfig::from_env("YUKANG_TEST_DASHSCOPE_KEY_NEVER_SET");
        assert!(!config.has_credential());
        assert_eq!(config.api_key_env, "YUKANG_TEST_DASHSCOPE_KEY_NEVER_SET");
    }

    #[test]
    fn builders_override_defaults() {
        let config = DashScopeConfig::new("k")
            .with_model("qwen-plus")
            .with_timeout(None)
            .with_endpoint("http://localhost:9/gen");
        assert_eq!(config.model, "qwen-plus");
        assert_eq!(config.timeout, None);
        assert_eq!(config.endpoint, "http://localhost:9/gen");
        assert_eq!(config.result_format, "message");
    }
}
