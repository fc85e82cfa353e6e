//! Template script used when the model reply cannot be parsed.

use scribe_core::{ScriptRecord, Segment};

/// Build the deterministic fallback script for `topic`.
///
/// The record depends on nothing but the topic, so repeated calls are
/// byte-identical.
///
/// # Examples
///
/// ```
/// use scribe_pipeline::fallback_script;
///
/// let script = fallback_script("Coffee");
/// assert_eq!(script.title, "Amazing Facts About Coffee");
/// assert_eq!(script.segments.len(), 3);
/// assert_eq!(script, fallback_script("Coffee"));
/// ```
pub fn fallback_script(topic: &str) -> ScriptRecord {
    ScriptRecord {
        title: format!("Amazing Facts About {topic}"),
        hook: format!(
            "Did you know that {topic} has some incredible stories most people never hear about? \
             Stick around to learn something amazing!"
        ),
        introduction: format!(
            "In this video, we're exploring {topic}. We'll uncover fascinating facts, share \
             surprising stories, and reveal why this matters more than you might think."
        ),
        segments: vec![
            Segment::new(
                format!("The Story of {topic}"),
                format!(
                    "Let's start with the origins. {topic} has a rich history that's full of \
                     surprises... [PAUSE] [VISUAL: Show historical images or timeline]"
                ),
            ),
            Segment::new(
                "Key Facts You Need to Know",
                "Here are the most important things to understand about this topic... \
                 [PAUSE] [VISUAL: Display key facts on screen]",
            ),
            Segment::new(
                "Why This Matters Today",
                "You might wonder why this is relevant. Well, here are the reasons it's \
                 important right now... [PAUSE]",
            ),
        ],
        call_to_action: "If you enjoyed this video and learned something new, please hit that \
                         like button and subscribe for more content like this! Leave a comment \
                         below with your thoughts."
            .to_string(),
        video_length: "8-10 minutes".to_string(),
        seo_keywords: vec![
            topic.to_string(),
            format!("{topic} explained"),
            "youtube tutorial".to_string(),
            "educational content".to_string(),
            "learn online".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_is_populated() {
        let script = fallback_script("The History of the Internet");
        assert!(!script.hook.is_empty());
        assert!(!script.introduction.is_empty());
        assert!(!script.call_to_action.is_empty());
        assert!(script.has_segments());
        assert!(script.segments.iter().all(|s| !s.heading.is_empty() && !s.content.is_empty()));
        assert_eq!(script.segments[0].heading, "The Story of The History of the Internet");
    }

    #[test]
    fn keywords_lead_with_topic() {
        let script = fallback_script("Coffee");
        assert_eq!(script.seo_keywords[0], "Coffee");
        assert_eq!(script.seo_keywords[1], "Coffee explained");
    }

    #[test]
    fn line_continuations_leave_single_spaces() {
        let script = fallback_script("Tea");
        assert!(!script.hook.contains("  "));
        assert!(!script.call_to_action.contains("  "));
    }
}
