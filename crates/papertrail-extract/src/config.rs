//! Extractor configuration

use serde::{Deserialize, Serialize};

/// Configuration for page fetching
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User agent for web requests
    pub user_agent: String,

    /// Maximum response body size in bytes
    pub max_body_bytes: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            // Many publisher sites refuse non-browser agents
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string(),
            max_body_bytes: 5_000_000,
        }
    }
}

impl ExtractorConfig {
    /// Create a new config with custom timeout
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Create a new config with a custom user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Create a new config with a custom body cap
    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ExtractorConfig = serde_json::from_str(r#"{"timeout_secs": 3}"#).unwrap();
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.max_body_bytes, ExtractorConfig::default().max_body_bytes);
    }
}
