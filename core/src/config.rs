//! Client configuration: endpoint base URL and request timeout.

use std::time::Duration;

use crate::error::ConfigError;

/// Production endpoint of the vendor API.
pub const DEFAULT_BASE_URL: &str = "http://open.10ss.net:8888";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Upper bound for a whole request, connect through body. Never zero when
    /// loaded from the environment.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `YLY_BASE_URL` and `YLY_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like `from_env`, reading each variable through `lookup`. Lets callers
    /// layer their own sources (command-line flags) over the environment.
    pub fn from_lookup(
        lookup: impl Fn(&'static str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(url) = lookup("YLY_BASE_URL") {
            config.base_url = url;
        }
        if let Some(raw) = lookup("YLY_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|&secs| secs > 0)
                .ok_or_else(|| ConfigError::Invalid {
                    var: "YLY_TIMEOUT_SECS",
                    value: raw.clone(),
                })?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_vendor() {
        let config = ClientConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url, "http://open.10ss.net:8888");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn env_overrides_defaults() {
        let config = ClientConfig::from_lookup(|var| match var {
            "YLY_BASE_URL" => Some("http://127.0.0.1:9000".to_string()),
            "YLY_TIMEOUT_SECS" => Some(" 5 ".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn bad_timeout_is_rejected() {
        let err = ClientConfig::from_lookup(|var| {
            (var == "YLY_TIMEOUT_SECS").then(|| "soon".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "YLY_TIMEOUT_SECS", .. }));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = ClientConfig::from_lookup(|var| {
            (var == "YLY_TIMEOUT_SECS").then(|| "0".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref value, .. } if value == "0"));
    }
}
