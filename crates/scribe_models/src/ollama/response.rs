//! Response bodies returned by the Ollama API.

use serde::{Deserialize, Serialize};

/// Body of `POST /generate`, or one NDJSON line of it when streaming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GenerateChunk {
    /// Generated text (the whole reply, or this chunk's increment)
    #[serde(default)]
    pub response: String,
    /// Whether this is the last chunk
    #[serde(default)]
    pub done: bool,
    /// Error reported mid-stream by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Body of `POST /chat` with `stream: false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The assistant turn
    pub message: ResponseMessage,
}

/// Assistant turn inside a chat response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMessage {
    /// Role reported by the server (normally `assistant`)
    #[serde(default)]
    pub role: String,
    /// Generated content
    pub content: String,
}

/// Body of `GET /tags`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TagsResponse {
    /// Installed models
    #[serde(default)]
    pub models: Vec<ModelTag>,
}

/// One installed model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelTag {
    /// Model identifier, e.g. `llama3.2-vision:latest`
    pub name: String,
}
