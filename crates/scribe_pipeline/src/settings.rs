//! Sampling settings for the two pipeline steps.

use crate::ExtractorKind;
use serde::{Deserialize, Serialize};

/// Per-step sampling parameters and the reply extraction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineSettings {
    /// Temperature for the research call
    pub research_temperature: f32,
    /// Output token limit for the research call
    pub research_max_tokens: u32,
    /// Temperature for the script call
    pub script_temperature: f32,
    /// How JSON is located in the script reply
    pub extractor: ExtractorKind,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            research_temperature: 0.7,
            research_max_tokens: 2000,
            script_temperature: 0.8,
            extractor: ExtractorKind::Brace,
        }
    }
}
