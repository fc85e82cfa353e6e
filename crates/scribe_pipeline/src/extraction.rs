//! Locating JSON inside free-text model replies.
//!
//! Models asked for "JSON only" still wrap it in commentary or markdown
//! fences. Two strategies are provided:
//!
//! - [`BraceSpanExtractor`]: everything from the first `{` to the last `}`.
//!   Permissive; mis-extracts when prose around the object contains braces
//!   or when the reply holds several objects.
//! - [`BalancedExtractor`]: a ```json fenced block if present, otherwise the
//!   first brace-balanced object, ignoring braces inside string literals.

use scribe_interface::JsonExtractor;
use serde::{Deserialize, Serialize};

/// First `{` through last `}` inclusive.
///
/// # Examples
///
/// ```
/// use scribe_interface::JsonExtractor;
/// use scribe_pipeline::BraceSpanExtractor;
///
/// let reply = "Sure! {\"title\": \"X\"} Hope this helps.";
/// assert_eq!(BraceSpanExtractor.extract(reply), Some("{\"title\": \"X\"}"));
/// assert_eq!(BraceSpanExtractor.extract("no json here"), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BraceSpanExtractor;

impl JsonExtractor for BraceSpanExtractor {
    fn extract<'a>(&self, reply: &'a str) -> Option<&'a str> {
        let start = reply.find('{')?;
        let end = reply.rfind('}')?;
        if end < start {
            return None;
        }
        Some(&reply[start..=end])
    }

    fn name(&self) -> &'static str {
        "brace"
    }
}

/// Fenced block first, then the first balanced object.
///
/// # Examples
///
/// ```
/// use scribe_interface::JsonExtractor;
/// use scribe_pipeline::BalancedExtractor;
///
/// let reply = "Here you go:\n```json\n{\"title\": \"X\"}\n```\nAnd {another}.";
/// assert_eq!(BalancedExtractor.extract(reply), Some("{\"title\": \"X\"}"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BalancedExtractor;

impl JsonExtractor for BalancedExtractor {
    fn extract<'a>(&self, reply: &'a str) -> Option<&'a str> {
        if let Some(block) = extract_from_code_block(reply) {
            if let Some(object) = extract_balanced(block) {
                return Some(object);
            }
        }
        extract_balanced(reply)
    }

    fn name(&self) -> &'static str {
        "balanced"
    }
}

/// Extraction strategy selectable from configuration.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ExtractorKind {
    /// [`BraceSpanExtractor`]
    #[default]
    Brace,
    /// [`BalancedExtractor`]
    Balanced,
}

impl ExtractorKind {
    /// Instantiate the strategy.
    pub fn extractor(self) -> Box<dyn JsonExtractor> {
        match self {
            ExtractorKind::Brace => Box::new(BraceSpanExtractor),
            ExtractorKind::Balanced => Box::new(BalancedExtractor),
        }
    }
}

/// Body of the first markdown code fence, with or without a `json` tag.
fn extract_from_code_block(reply: &str) -> Option<&str> {
    let start = reply.find("```")?;
    let after_fence = &reply[start + 3..];
    // Skip the language tag line
    let body_start = after_fence.find('\n').map(|n| n + 1).unwrap_or(0);
    let body = &after_fence[body_start..];

    match body.find("```") {
        Some(end) => Some(body[..end].trim()),
        // No closing fence, likely a truncated reply
        None => Some(body.trim()),
    }
}

/// First `{ ... }` span whose braces balance outside string literals.
fn extract_balanced(reply: &str) -> Option<&str> {
    let start = reply.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in reply[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&reply[start..start + i + 1]);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brace_span_keeps_closing_brace() {
        let reply = "{\"a\":{\"b\":1}}";
        assert_eq!(BraceSpanExtractor.extract(reply), Some(reply));
    }

    #[test]
    fn brace_span_rejects_close_before_open() {
        assert_eq!(BraceSpanExtractor.extract("} oops {"), None);
    }

    #[test]
    fn brace_span_rejects_missing_close() {
        assert_eq!(BraceSpanExtractor.extract("{\"title\": \"cut off"), None);
    }

    #[test]
    fn brace_span_swallows_trailing_prose_braces() {
        let reply = "{\"a\":1} and also {b}";
        assert_eq!(BraceSpanExtractor.extract(reply), Some(reply));
    }

    #[test]
    fn balanced_stops_at_matching_brace() {
        let reply = "{\"a\":1} and also {b}";
        assert_eq!(BalancedExtractor.extract(reply), Some("{\"a\":1}"));
    }

    #[test]
    fn balanced_ignores_braces_in_strings() {
        let reply = r#"x {"content": "use } carefully \" {"} y"#;
        assert_eq!(
            BalancedExtractor.extract(reply),
            Some(r#"{"content": "use } carefully \" {"}"#)
        );
    }

    #[test]
    fn balanced_reads_untagged_fence() {
        let reply = "```\n{\"a\": 1}\n```";
        assert_eq!(BalancedExtractor.extract(reply), Some("{\"a\": 1}"));
    }

    #[test]
    fn balanced_unclosed_object_is_none() {
        assert_eq!(BalancedExtractor.extract("{\"a\": {"), None);
    }

    #[test]
    fn kind_parses_from_config_strings() {
        assert_eq!("balanced".parse::<ExtractorKind>().unwrap(), ExtractorKind::Balanced);
        assert_eq!(ExtractorKind::default().extractor().name(), "brace");
    }
}
