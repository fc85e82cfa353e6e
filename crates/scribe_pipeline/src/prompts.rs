//! Prompt templates.

/// System turn for script generation: JSON and nothing else.
pub const SCRIPT_SYSTEM_PROMPT: &str = "\
You are a professional YouTube scriptwriter with millions of subscribers.
Your task is to create engaging, well-structured YouTube scripts.
ALWAYS respond with valid JSON only. Do not add commentary, explanations, or any text outside the JSON.
";

/// Research prompt for `topic`, written for spoken narration.
pub fn research_prompt(topic: &str) -> String {
    format!(
        "\
Create a compelling and engaging script that covers the following aspects of {topic}. \
Write in a clear, conversational style suitable for YouTube narration. \
Use short, punchy sentences and include hooks that keep viewers interested. \
Structure the response with headings and bullet points for easy readability. \
Focus on storytelling and audience connection, not just dry facts. Cover:
- Key Facts & Statistics
  - Present surprising or memorable numbers that grab attention.
  - Highlight quick, digestible facts viewers can easily remember.
- Historical Context
  - Explain the origins and evolution of the topic.
  - Mention pivotal events or turning points that shaped its importance.
- Stories & Anecdotes
  - Share fascinating human stories, myths, or quirky details.
  - Include examples that make the topic relatable and entertaining.
- Current Relevance & Controversies
  - Show why this topic matters today.
  - Mention debates, trends, or hot takes that spark curiosity.
- Why It Matters to Viewers
  - Connect the topic to everyday life, culture, or global impact.
  - End with a thought-provoking takeaway that encourages reflection or discussion.
"
    )
}

/// User turn for script generation: topic, research, and the target schema.
pub fn script_user_prompt(topic: &str, research: &str) -> String {
    format!(
        r#"Create a YouTube script about: {topic}

Use the following research information to enrich the script:
{research}

Return a JSON object with exactly this structure:
{{
  "title": "Catchy, SEO-friendly YouTube title",
  "hook": "An attention-grabbing opening (first 15 seconds) that makes viewers stay",
  "introduction": "A short, conversational intro (around 30 seconds) explaining what viewers will learn",
  "segments": [
    {{
      "heading": "Segment 1 heading",
      "content": "Engaging content for segment 1. Include [PAUSE] markers and [VISUAL: description] cues for editing."
    }},
    {{
      "heading": "Segment 2 heading",
      "content": "Engaging content for segment 2 with natural speaking patterns."
    }},
    {{
      "heading": "Segment 3 heading",
      "content": "Engaging content for segment 3 with storytelling elements."
    }}
  ],
  "call_to_action": "A strong ending encouraging likes, subscribes, and comments",
  "video_length": "Estimated video length (e.g., '8-10 minutes')"
}}
Guidelines:
- Make the script conversational and easy to narrate.
- Use short, punchy sentences and natural speaking patterns.
- Add hooks, anecdotes, or surprising facts to keep viewers engaged.
- Ensure the JSON is valid and follows the exact structure above.
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn research_prompt_names_topic_and_sections() {
        let prompt = research_prompt("Coffee");
        assert!(prompt.contains("aspects of Coffee."));
        for section in [
            "Key Facts & Statistics",
            "Historical Context",
            "Stories & Anecdotes",
            "Current Relevance & Controversies",
            "Why It Matters to Viewers",
        ] {
            assert!(prompt.contains(section), "missing {section}");
        }
    }

    #[test]
    fn user_prompt_embeds_research_and_schema() {
        let prompt = script_user_prompt("Coffee", "Coffee came from Ethiopia.");
        assert!(prompt.starts_with("Create a YouTube script about: Coffee"));
        assert!(prompt.contains("Coffee came from Ethiopia."));
        for key in ["\"title\"", "\"hook\"", "\"introduction\"", "\"segments\"", "\"call_to_action\"", "\"video_length\""] {
            assert!(prompt.contains(key), "missing {key}");
        }
    }

    #[test]
    fn system_prompt_demands_json() {
        assert!(SCRIPT_SYSTEM_PROMPT.contains("valid JSON only"));
    }
}
