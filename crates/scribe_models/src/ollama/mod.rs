//! Ollama HTTP API client.

mod client;
mod response;

pub use client::OllamaClient;
pub use response::{ChatResponse, GenerateChunk, ModelTag, ResponseMessage, TagsResponse};
