//! Trait definitions for model backends and reply extraction.

use async_trait::async_trait;
use scribe_core::ChatMessage;
use scribe_error::ScribeResult;

/// A text model reachable over the network.
///
/// Connectivity probes never fail: they degrade to `false` or an empty list.
/// Generation calls return a tagged result so callers can tell model output
/// from transport failure.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Whether the server answers its metadata endpoint with a success status.
    async fn check_connection(&self) -> bool;

    /// Model identifiers installed on the server, empty on any failure.
    async fn list_models(&self) -> Vec<String>;

    /// Single-turn generation.
    async fn generate_text(
        &self,
        prompt: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> ScribeResult<String>;

    /// Multi-turn, non-streamed chat completion returning the assistant text.
    async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
        temperature: f32,
    ) -> ScribeResult<String>;

    /// Model identifier requests are sent with.
    fn model_name(&self) -> &str;
}

/// Locates the JSON payload inside a free-text model reply.
pub trait JsonExtractor: Send + Sync {
    /// Return the slice believed to hold a JSON object, if any.
    fn extract<'a>(&self, reply: &'a str) -> Option<&'a str>;

    /// Short name used in logs and configuration.
    fn name(&self) -> &'static str;
}
