//! Research step.

use crate::{PipelineSettings, research_prompt};
use scribe_error::ScribeResult;
use scribe_interface::{DisplayText, TextModel};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Asks the generation endpoint for narration-ready research on a topic.
#[derive(Clone)]
pub struct Researcher {
    model: Arc<dyn TextModel>,
    temperature: f32,
    max_tokens: u32,
}

impl Researcher {
    /// Create a researcher using the research settings.
    pub fn new(model: Arc<dyn TextModel>, settings: &PipelineSettings) -> Self {
        Self {
            model,
            temperature: settings.research_temperature,
            max_tokens: settings.research_max_tokens,
        }
    }

    /// Research `topic`, keeping transport failures distinguishable.
    #[instrument(skip(self), fields(model = %self.model.model_name()))]
    pub async fn try_research(&self, topic: &str) -> ScribeResult<String> {
        let prompt = research_prompt(topic);
        debug!(prompt_length = prompt.len(), "Requesting research");

        self.model
            .generate_text(&prompt, self.temperature, self.max_tokens)
            .await
    }

    /// Research `topic`; failures come back as an `Error: ...` line.
    pub async fn research(&self, topic: &str) -> String {
        let result = self.try_research(topic).await;
        if let Err(e) = &result {
            warn!(error = %e, "Research failed");
        }
        result.into_display_text()
    }
}

impl std::fmt::Debug for Researcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Researcher")
            .field("model", &self.model.model_name())
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}
