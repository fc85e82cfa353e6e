//! The structured YouTube script.

use serde::{Deserialize, Serialize};

/// One titled section of a script body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    /// Section heading
    pub heading: String,
    /// Narration for the section
    pub content: String,
}

impl Segment {
    /// Create a new segment.
    pub fn new(heading: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            content: content.into(),
        }
    }
}

/// A complete video script.
///
/// The script builder guarantees this shape on every call, substituting a
/// template record when the model reply cannot be parsed.
///
/// # Examples
///
/// ```
/// use scribe_core::ScriptRecord;
///
/// let json = r#"{"title":"X","hook":"H","introduction":"I",
///     "segments":[{"heading":"A","content":"B"}],
///     "call_to_action":"C","video_length":"5 min"}"#;
///
/// let script: ScriptRecord = serde_json::from_str(json).unwrap();
/// assert_eq!(script.title, "X");
/// assert!(script.seo_keywords.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScriptRecord {
    /// Video title
    pub title: String,
    /// Opening lines meant to hold the viewer
    pub hook: String,
    /// Short introduction to what the video covers
    pub introduction: String,
    /// Ordered body sections
    pub segments: Vec<Segment>,
    /// Closing request to like, subscribe, and comment
    pub call_to_action: String,
    /// Estimated running time, free text
    pub video_length: String,
    /// Search keywords
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub seo_keywords: Vec<String>,
}

impl ScriptRecord {
    /// Whether the record has a body to narrate.
    pub fn has_segments(&self) -> bool {
        !self.segments.is_empty()
    }
}
