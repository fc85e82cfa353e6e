//! Request bodies for the inference server.

use crate::ChatMessage;
use serde::{Deserialize, Serialize};

/// Sampling parameters sent under `options`.
///
/// `num_predict` is the server's name for the maximum number of output
/// tokens; it is omitted from the body when unset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingOptions {
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum number of tokens to generate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<u32>,
}

impl SamplingOptions {
    /// Options with only a temperature.
    pub fn with_temperature(temperature: f32) -> Self {
        Self {
            temperature,
            num_predict: None,
        }
    }

    /// Set the output token limit.
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.num_predict = Some(max_tokens);
        self
    }
}

/// Single-turn generation request (`POST {base}/generate`).
///
/// # Examples
///
/// ```
/// use scribe_core::{GenerationRequest, SamplingOptions};
///
/// let request = GenerationRequest::new(
///     "llama3.2-vision",
///     "Tell me about coffee",
///     SamplingOptions::with_temperature(0.7).max_tokens(2000),
/// );
///
/// let body = serde_json::to_value(&request).unwrap();
/// assert_eq!(body["stream"], false);
/// assert_eq!(body["options"]["num_predict"], 2000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Model identifier
    pub model: String,
    /// Prompt text
    pub prompt: String,
    /// Whether the server should answer with NDJSON chunks
    pub stream: bool,
    /// Sampling parameters
    pub options: SamplingOptions,
}

impl GenerationRequest {
    /// Create a non-streaming request.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>, options: SamplingOptions) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
            options,
        }
    }

    /// Toggle NDJSON streaming.
    pub fn streaming(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }
}

/// Multi-turn chat request (`POST {base}/chat`).
///
/// Message order is significant: the system turn precedes the user turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Model identifier
    pub model: String,
    /// Ordered conversation turns
    pub messages: Vec<ChatMessage>,
    /// Always false; chat replies are read as a single body
    pub stream: bool,
    /// Sampling parameters
    pub options: SamplingOptions,
    /// Structured-output mode (`"json"`), when the server should constrain output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl ChatRequest {
    /// Create a non-streaming chat request.
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>, temperature: f32) -> Self {
        Self {
            model: model.into(),
            messages,
            stream: false,
            options: SamplingOptions::with_temperature(temperature),
            format: None,
        }
    }

    /// Ask the server to emit JSON only.
    pub fn json_mode(mut self) -> Self {
        self.format = Some("json".to_string());
        self
    }
}
