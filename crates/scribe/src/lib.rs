//! Research a topic with a local LLM and turn it into a YouTube script.
//!
//! This facade re-exports the workspace crates and adds what the `scribe`
//! binary needs on top: layered configuration, logging setup, and output
//! rendering.
//!
//! ```no_run
//! use scribe::{ScribeConfig, build_pipeline};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ScribeConfig::load()?;
//! let (_client, pipeline) = build_pipeline(&config)?;
//! let result = pipeline.generate("Coffee").await;
//! println!("{}", result.script().title);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod report;
mod telemetry;

pub use config::{CONFIG_FILE_NAME, ScribeConfig};
pub use report::{PREVIEW_CHARS, preview, render_json, render_preview};
pub use telemetry::init_telemetry;

pub use scribe_core::{
    ChatMessage, ChatRequest, GenerationRequest, PipelineResult, Role, SamplingOptions,
    ScriptRecord, Segment,
};
pub use scribe_error::{
    ConfigError, JsonError, ModelError, ModelErrorKind, ScribeError, ScribeErrorKind,
    ScribeResult, ScriptError, ScriptErrorKind,
};
pub use scribe_interface::{DisplayText, JsonExtractor, TextModel};
pub use scribe_models::{ClientConfig, ClientConfigBuilder, OllamaClient};
pub use scribe_pipeline::{
    BalancedExtractor, BraceSpanExtractor, ExtractorKind, PipelineSettings, Researcher,
    ScriptBuilder, ScriptPipeline, fallback_script,
};

use std::sync::Arc;

/// Create the Ollama client and a pipeline that uses it.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn build_pipeline(config: &ScribeConfig) -> ScribeResult<(Arc<OllamaClient>, ScriptPipeline)> {
    let client = Arc::new(OllamaClient::new(config.client.clone())?);
    let pipeline = ScriptPipeline::new(client.clone(), config.pipeline);
    Ok((client, pipeline))
}
