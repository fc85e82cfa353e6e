//! Rendering pipeline results for the terminal.

use scribe_core::PipelineResult;
use scribe_error::{JsonError, ScribeResult};

/// Characters shown of the research and script in the default output.
pub const PREVIEW_CHARS: usize = 200;

/// First `max_chars` characters of `text`, cut on a character boundary.
///
/// # Examples
///
/// ```
/// use scribe::preview;
///
/// assert_eq!(preview("héllo world", 5), "héllo");
/// assert_eq!(preview("short", 200), "short");
/// ```
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Banner, topic, and truncated previews of the research and script.
///
/// # Errors
///
/// Returns an error if the script cannot be serialized.
pub fn render_preview(result: &PipelineResult) -> ScribeResult<String> {
    let script = serde_json::to_string(result.script())
        .map_err(|e| JsonError::new(format!("Failed to serialize script: {}", e)))?;

    Ok(format!(
        "=== YouTube Script Pipeline Output ===\nTopic: {}\nResearch: {}...\nScript: {}...",
        result.topic(),
        preview(result.research(), PREVIEW_CHARS),
        preview(&script, PREVIEW_CHARS),
    ))
}

/// The whole result as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if the result cannot be serialized.
pub fn render_json(result: &PipelineResult) -> ScribeResult<String> {
    Ok(serde_json::to_string_pretty(result)
        .map_err(|e| JsonError::new(format!("Failed to serialize result: {}", e)))?)
}
