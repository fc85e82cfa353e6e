//! Local inference server client for scribe.
//!
//! The Ollama client sits behind the `ollama` feature (enabled by default)
//! and implements [`scribe_interface::TextModel`].
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "ollama")]
//! # {
//! use scribe_interface::TextModel;
//! use scribe_models::{ClientConfigBuilder, OllamaClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfigBuilder::default()
//!     .base_url("http://127.0.0.1:11434/api")
//!     .model("llama3.2-vision")
//!     .build()?;
//! let client = OllamaClient::new(config)?;
//!
//! if client.check_connection().await {
//!     let text = client.generate_text("Say hello", 0.7, 64).await?;
//!     println!("{text}");
//! }
//! # Ok(())
//! # }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;

pub use config::{
    ClientConfig, ClientConfigBuilder, ClientConfigBuilderError, DEFAULT_BASE_URL, DEFAULT_MODEL,
};

#[cfg(feature = "ollama")]
mod ollama;

#[cfg(feature = "ollama")]
pub use ollama::{ChatResponse, GenerateChunk, ModelTag, OllamaClient, ResponseMessage, TagsResponse};
