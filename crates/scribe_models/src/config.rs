//! Connection settings for the inference server.

use scribe_error::{ModelError, ModelErrorKind, ModelResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default API root of a local Ollama server.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:11434/api";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "llama3.2-vision";

/// Everything the client needs to reach the server.
///
/// # Examples
///
/// ```
/// use scribe_models::{ClientConfig, ClientConfigBuilder};
///
/// let config = ClientConfigBuilder::default()
///     .model("mistral")
///     .timeout_secs(30u64)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.model, "mistral");
/// assert_eq!(config.base_url, scribe_models::DEFAULT_BASE_URL);
/// assert_eq!(config.timeout().as_secs(), 30);
///
/// assert!(ClientConfigBuilder::default().timeout_secs(0u64).build().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into), default, build_fn(validate = "Self::validate"))]
#[serde(default)]
pub struct ClientConfig {
    /// API root, e.g. `http://127.0.0.1:11434/api`
    pub base_url: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Upper bound for generation and chat calls, in seconds
    pub timeout_secs: u64,
    /// Upper bound for the health probe, in seconds
    pub health_timeout_secs: u64,
    /// Request NDJSON streaming from the generation endpoint
    pub stream: bool,
    /// Ask the chat endpoint for JSON-only output
    pub json_mode: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: 120,
            health_timeout_secs: 5,
            stream: false,
            json_mode: false,
        }
    }
}

impl ClientConfig {
    /// Create a configuration for the given server and model.
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            ..Self::default()
        }
    }

    /// Timeout for generation and chat calls.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Timeout for the health probe.
    pub fn health_timeout(&self) -> Duration {
        Duration::from_secs(self.health_timeout_secs)
    }

    /// Run a configuration assembled elsewhere (e.g. deserialized) through
    /// the builder's checks.
    pub fn validated(self) -> ModelResult<Self> {
        Ok(ClientConfigBuilder::default()
            .base_url(self.base_url)
            .model(self.model)
            .timeout_secs(self.timeout_secs)
            .health_timeout_secs(self.health_timeout_secs)
            .stream(self.stream)
            .json_mode(self.json_mode)
            .build()?)
    }

    /// Full URL of an endpoint below the API root.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl ClientConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(base_url) = &self.base_url {
            if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
                return Err(format!("base_url must be an http(s) URL, got {}", base_url));
            }
        }
        if let Some(model) = &self.model {
            if model.trim().is_empty() {
                return Err("model must not be empty".to_string());
            }
        }
        if self.timeout_secs == Some(0) || self.health_timeout_secs == Some(0) {
            return Err("timeouts must be at least one second".to_string());
        }
        Ok(())
    }
}

impl From<ClientConfigBuilderError> for ModelError {
    #[track_caller]
    fn from(err: ClientConfigBuilderError) -> Self {
        ModelError::new(ModelErrorKind::InvalidConfiguration(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = ClientConfig::new("http://localhost:11434/api/", "m");
        assert_eq!(config.endpoint("tags"), "http://localhost:11434/api/tags");
    }

    #[test]
    fn defaults_match_local_ollama() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint("chat"), "http://127.0.0.1:11434/api/chat");
        assert_eq!(config.timeout(), Duration::from_secs(120));
        assert_eq!(config.health_timeout(), Duration::from_secs(5));
        assert!(!config.stream);
    }

    #[test]
    fn builder_rejects_non_http_url() {
        let err = ClientConfigBuilder::default()
            .base_url("localhost:11434")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn validated_rejects_zero_timeout() {
        let config = ClientConfig {
            timeout_secs: 0,
            ..ClientConfig::default()
        };
        let err = config.validated().unwrap_err();
        assert!(matches!(err.kind, ModelErrorKind::InvalidConfiguration(_)));
    }

    #[test]
    fn builder_rejects_blank_model() {
        assert!(ClientConfigBuilder::default().model("  ").build().is_err());
    }
}
