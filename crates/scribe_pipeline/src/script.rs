//! Script building step.

use crate::{PipelineSettings, SCRIPT_SYSTEM_PROMPT, fallback_script, script_user_prompt};
use scribe_core::{ChatMessage, ScriptRecord};
use scribe_error::{ScribeResult, ScriptError, ScriptErrorKind};
use scribe_interface::{JsonExtractor, TextModel};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Parse a model reply into a script.
///
/// The extractor isolates the JSON object; the object must deserialize into
/// a [`ScriptRecord`] with at least one segment.
///
/// # Errors
///
/// Returns a script error when no object is found, the object does not
/// match the schema, or it has no segments.
///
/// # Examples
///
/// ```
/// use scribe_pipeline::{BraceSpanExtractor, parse_script};
///
/// let reply = r#"Here is your script: {"title":"X","hook":"H","introduction":"I",
///     "segments":[{"heading":"A","content":"B"}],
///     "call_to_action":"C","video_length":"5 min"}"#;
///
/// let script = parse_script(reply, &BraceSpanExtractor).unwrap();
/// assert_eq!(script.title, "X");
///
/// assert!(parse_script("just prose", &BraceSpanExtractor).is_err());
/// ```
pub fn parse_script(reply: &str, extractor: &dyn JsonExtractor) -> ScribeResult<ScriptRecord> {
    let payload = extractor
        .extract(reply)
        .ok_or_else(|| ScriptError::new(ScriptErrorKind::NoJsonFound(reply.len())))?;

    let script: ScriptRecord = serde_json::from_str(payload)
        .map_err(|e| ScriptError::new(ScriptErrorKind::InvalidJson(e.to_string())))?;

    if !script.has_segments() {
        return Err(ScriptError::new(ScriptErrorKind::EmptySegments).into());
    }

    Ok(script)
}

/// Turns research into a structured script through the chat endpoint.
pub struct ScriptBuilder {
    model: Arc<dyn TextModel>,
    extractor: Box<dyn JsonExtractor>,
    temperature: f32,
}

impl ScriptBuilder {
    /// Create a builder using the script settings.
    pub fn new(model: Arc<dyn TextModel>, settings: &PipelineSettings) -> Self {
        Self {
            model,
            extractor: settings.extractor.extractor(),
            temperature: settings.script_temperature,
        }
    }

    /// Replace the reply extraction strategy.
    pub fn with_extractor(mut self, extractor: Box<dyn JsonExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// System and user turns for `topic`, in request order.
    pub fn messages(topic: &str, research: &str) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(SCRIPT_SYSTEM_PROMPT),
            ChatMessage::user(script_user_prompt(topic, research)),
        ]
    }

    /// Request and parse a script without falling back.
    #[instrument(skip(self, research), fields(model = %self.model.model_name(), extractor = self.extractor.name()))]
    pub async fn try_build_script(&self, topic: &str, research: &str) -> ScribeResult<ScriptRecord> {
        let reply = self
            .model
            .chat_completion(Self::messages(topic, research), self.temperature)
            .await?;
        debug!(reply_length = reply.len(), "Received script reply");

        parse_script(&reply, self.extractor.as_ref())
    }

    /// Request a script, substituting the fallback record on any failure.
    pub async fn build_script(&self, topic: &str, research: &str) -> ScriptRecord {
        match self.try_build_script(topic, research).await {
            Ok(script) => {
                info!(title = %script.title, segments = script.segments.len(), "Parsed script");
                script
            }
            Err(e) => {
                warn!(error = %e, "Using fallback script");
                fallback_script(topic)
            }
        }
    }
}

impl std::fmt::Debug for ScriptBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptBuilder")
            .field("model", &self.model.model_name())
            .field("extractor", &self.extractor.name())
            .field("temperature", &self.temperature)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BalancedExtractor, BraceSpanExtractor};
    use scribe_error::ScribeErrorKind;

    const VALID: &str = r#"{"title":"X","hook":"H","introduction":"I","segments":[{"heading":"A","content":"B"}],"call_to_action":"C","video_length":"5 min"}"#;

    fn script_kind(result: ScribeResult<ScriptRecord>) -> ScriptErrorKind {
        match result.unwrap_err().kind() {
            ScribeErrorKind::Script(e) => e.kind().clone(),
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn exact_body_parses() {
        let script = parse_script(VALID, &BraceSpanExtractor).unwrap();
        assert_eq!(script.title, "X");
        assert_eq!(script.segments.len(), 1);
        assert_eq!(script.segments[0].heading, "A");
        assert_eq!(script.segments[0].content, "B");
        assert_eq!(script.video_length, "5 min");
    }

    #[test]
    fn fenced_body_parses_with_both_extractors() {
        let reply = format!("```json\n{VALID}\n```");
        assert!(parse_script(&reply, &BraceSpanExtractor).is_ok());
        assert!(parse_script(&reply, &BalancedExtractor).is_ok());
    }

    #[test]
    fn prose_without_braces_has_no_json() {
        assert!(matches!(
            script_kind(parse_script("I cannot do that.", &BraceSpanExtractor)),
            ScriptErrorKind::NoJsonFound(_)
        ));
    }

    #[test]
    fn unterminated_object_has_no_json() {
        let reply = r#"{"title":"X","hook":"H""#;
        assert!(matches!(
            script_kind(parse_script(reply, &BraceSpanExtractor)),
            ScriptErrorKind::NoJsonFound(_)
        ));
    }

    #[test]
    fn missing_field_is_invalid() {
        let reply = r#"{"title":"X","segments":[{"heading":"A","content":"B"}]}"#;
        assert!(matches!(
            script_kind(parse_script(reply, &BraceSpanExtractor)),
            ScriptErrorKind::InvalidJson(_)
        ));
    }

    #[test]
    fn empty_segments_are_rejected() {
        let reply = r#"{"title":"X","hook":"H","introduction":"I","segments":[],"call_to_action":"C","video_length":"5 min"}"#;
        assert_eq!(
            script_kind(parse_script(reply, &BraceSpanExtractor)),
            ScriptErrorKind::EmptySegments
        );
    }

    #[test]
    fn trailing_prose_braces_break_brace_span_only() {
        let reply = format!("{VALID}\nNote: replace {{placeholders}} as needed.");
        assert!(parse_script(&reply, &BraceSpanExtractor).is_err());
        assert!(parse_script(&reply, &BalancedExtractor).is_ok());
    }

    #[test]
    fn messages_put_system_first() {
        let messages = ScriptBuilder::messages("Coffee", "research");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, scribe_core::Role::System);
        assert_eq!(messages[1].role, scribe_core::Role::User);
        assert!(messages[1].content.contains("research"));
    }
}
