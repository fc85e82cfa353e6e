//! Research → script orchestration.

use crate::{PipelineSettings, Researcher, ScriptBuilder};
use scribe_core::PipelineResult;
use scribe_interface::TextModel;
use std::sync::Arc;
use tracing::{info, instrument};

/// Runs the research step, then the script step, and assembles the result.
#[derive(Debug)]
pub struct ScriptPipeline {
    researcher: Researcher,
    script_builder: ScriptBuilder,
}

impl ScriptPipeline {
    /// Create a pipeline whose steps share one model.
    pub fn new(model: Arc<dyn TextModel>, settings: PipelineSettings) -> Self {
        Self {
            researcher: Researcher::new(Arc::clone(&model), &settings),
            script_builder: ScriptBuilder::new(model, &settings),
        }
    }

    /// Assemble a pipeline from prepared steps.
    pub fn from_parts(researcher: Researcher, script_builder: ScriptBuilder) -> Self {
        Self {
            researcher,
            script_builder,
        }
    }

    /// Generate a complete script for `topic`.
    ///
    /// Always returns a result: research failures become an `Error: ...`
    /// research text and script failures become the fallback record.
    #[instrument(skip(self))]
    pub async fn generate(&self, topic: &str) -> PipelineResult {
        info!("Researching topic");
        let research = self.researcher.research(topic).await;

        info!(research_length = research.len(), "Building script");
        let script = self.script_builder.build_script(topic, &research).await;

        PipelineResult::new(topic, research, script)
    }
}
