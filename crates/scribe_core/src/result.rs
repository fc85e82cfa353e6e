//! Pipeline output.

use crate::ScriptRecord;
use serde::{Deserialize, Serialize};

/// Final output of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct PipelineResult {
    /// Topic the run was asked about
    topic: String,
    /// Research text, or a description of why research failed
    research: String,
    /// The generated or fallback script
    script: ScriptRecord,
}

impl PipelineResult {
    /// Assemble a result.
    pub fn new(topic: impl Into<String>, research: impl Into<String>, script: ScriptRecord) -> Self {
        Self {
            topic: topic.into(),
            research: research.into(),
            script,
        }
    }
}
