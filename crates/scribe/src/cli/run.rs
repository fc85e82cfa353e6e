//! Command execution.

use super::{Cli, Commands, DEFAULT_TOPIC};
use scribe::{
    OllamaClient, ScribeConfig, ScribeResult, TextModel, build_pipeline, render_json,
    render_preview,
};
use tracing::{info, instrument, warn};

/// Load configuration and run the selected command.
pub async fn dispatch(cli: Cli) -> ScribeResult<()> {
    let config = ScribeConfig::load()?.with_overrides(cli.model, cli.base_url)?;
    info!(
        base_url = %config.client.base_url,
        model = %config.client.model,
        "Configuration loaded"
    );

    match cli.command {
        None => generate(&config, DEFAULT_TOPIC, false).await,
        Some(Commands::Generate { topic, json }) => generate(&config, &topic, json).await,
        Some(Commands::Check) => check(&config).await,
        Some(Commands::Models) => models(&config).await,
    }
}

async fn generate(config: &ScribeConfig, topic: &str, json: bool) -> ScribeResult<()> {
    println!("{}", render_generation(config, topic, json).await?);
    Ok(())
}

/// Run the pipeline once and render the result.
///
/// Issues exactly the research and script requests; connection failures
/// show up in the rendered research text.
#[instrument(skip(config))]
async fn render_generation(config: &ScribeConfig, topic: &str, json: bool) -> ScribeResult<String> {
    let (_client, pipeline) = build_pipeline(config)?;
    let result = pipeline.generate(topic).await;

    if result.research().starts_with("Error: ") {
        warn!(
            base_url = %config.client.base_url,
            "Research failed; output falls back to templates"
        );
    }

    if json {
        render_json(&result)
    } else {
        render_preview(&result)
    }
}

async fn check(config: &ScribeConfig) -> ScribeResult<()> {
    let client = OllamaClient::new(config.client.clone())?;

    if !client.check_connection().await {
        println!("Not able to connect to the model server at {}", config.client.base_url);
        return Ok(());
    }
    println!("Connected to {}", config.client.base_url);

    match client.validate().await {
        Ok(()) => println!("Model {} is available", config.client.model),
        Err(e) => println!("{}", e.kind),
    }
    Ok(())
}

async fn models(config: &ScribeConfig) -> ScribeResult<()> {
    let client = OllamaClient::new(config.client.clone())?;
    let models = client.list_models().await;

    if models.is_empty() {
        println!("No models found at {}", config.client.base_url);
    }
    for model in models {
        println!("{}", model);
    }
    Ok(())
}
