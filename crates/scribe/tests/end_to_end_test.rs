//! End-to-end pipeline runs against a fake Ollama server.

use scribe::{
    ClientConfig, ScribeConfig, TextModel, build_pipeline, fallback_script, render_preview,
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(base_url: String) -> ScribeConfig {
    ScribeConfig {
        client: ClientConfig::new(base_url, "llama3.2-vision"),
        ..ScribeConfig::default()
    }
}

async fn mount_generate(server: &MockServer, response: &str) {
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": response,
            "done": true
        })))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_chat(server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": { "role": "assistant", "content": content },
            "done": true
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_generate_coffee_with_valid_script() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_generate(&server, "Coffee was discovered by goats.").await;
    mount_chat(
        &server,
        r#"{"title":"X","hook":"H","introduction":"I","segments":[{"heading":"A","content":"B"}],"call_to_action":"C","video_length":"5 min"}"#,
    )
    .await;

    let (_client, pipeline) = build_pipeline(&config_for(format!("{}/api", server.uri())))?;
    let result = pipeline.generate("Coffee").await;

    assert_eq!(result.topic(), "Coffee");
    assert_eq!(result.research(), "Coffee was discovered by goats.");
    assert_eq!(result.script().title, "X");
    assert_eq!(result.script().segments.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_generate_coffee_with_prose_reply() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_generate(&server, "Coffee research").await;
    mount_chat(&server, "Here is a great script about coffee, enjoy!").await;

    let (_client, pipeline) = build_pipeline(&config_for(format!("{}/api", server.uri())))?;
    let result = pipeline.generate("Coffee").await;

    assert_eq!(result.topic(), "Coffee");
    assert_eq!(result.script(), &fallback_script("Coffee"));
    Ok(())
}

#[tokio::test]
async fn test_generate_coffee_with_server_errors() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("out of memory"))
        .mount(&server)
        .await;

    let (_client, pipeline) = build_pipeline(&config_for(format!("{}/api", server.uri())))?;
    let result = pipeline.generate("Coffee").await;

    assert_eq!(result.topic(), "Coffee");
    assert_eq!(result.research(), "Error: 500 - out of memory");
    assert_eq!(result.script().title, "Amazing Facts About Coffee");
    Ok(())
}

#[tokio::test]
async fn test_generate_coffee_with_server_down() -> anyhow::Result<()> {
    let (client, pipeline) = build_pipeline(&config_for("http://127.0.0.1:9/api".to_string()))?;

    assert!(!client.check_connection().await);
    let result = pipeline.generate("Coffee").await;

    assert_eq!(result.topic(), "Coffee");
    assert!(result.research().starts_with("Error: "));
    assert!(result.script().has_segments());

    let rendered = render_preview(&result)?;
    assert!(rendered.contains("Topic: Coffee"));
    Ok(())
}
