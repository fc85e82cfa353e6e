//! Ollama client implementation.

use super::response::{ChatResponse, GenerateChunk, TagsResponse};
use crate::ClientConfig;
use scribe_core::{ChatMessage, ChatRequest, GenerationRequest, SamplingOptions};
use scribe_error::{ModelError, ModelErrorKind, ModelResult, ScribeResult};
use scribe_interface::TextModel;
use tracing::{debug, info, instrument, warn};

/// Client for a local Ollama server.
///
/// Holds its configuration explicitly so tests can point it at a fake server.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    config: ClientConfig,
    client: reqwest::Client,
}

impl OllamaClient {
    /// Create a client whose calls are bounded by the configured timeout.
    #[instrument(name = "ollama_client_new", skip(config), fields(base_url = %config.base_url, model = %config.model))]
    pub fn new(config: ClientConfig) -> ModelResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ModelError::new(ModelErrorKind::InvalidConfiguration(e.to_string())))?;

        debug!("Created Ollama client");
        Ok(Self { config, client })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch installed model names, keeping the failure reason.
    #[instrument(skip(self))]
    pub async fn try_list_models(&self) -> ModelResult<Vec<String>> {
        let response = self
            .client
            .get(self.config.endpoint("tags"))
            .send()
            .await
            .map_err(transport_error)?;
        let response = ensure_success(response).await?;

        let tags: TagsResponse = response
            .json()
            .await
            .map_err(|e| ModelError::new(ModelErrorKind::Decode(e.to_string())))?;

        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    /// Check that the server is reachable and the configured model is installed.
    #[instrument(skip(self), fields(model = %self.config.model))]
    pub async fn validate(&self) -> ModelResult<()> {
        let models = self.try_list_models().await.map_err(|e| {
            warn!(error = %e, "Failed to reach Ollama server");
            ModelError::new(ModelErrorKind::ServerNotRunning(self.config.base_url.clone()))
        })?;
        debug!(count = models.len(), "Found local models");

        if !models.iter().any(|name| model_matches(name, &self.config.model)) {
            warn!(available = ?models, "Model not found locally");
            return Err(ModelError::new(ModelErrorKind::ModelNotFound(
                self.config.model.clone(),
            )));
        }

        info!("Ollama server and model validated");
        Ok(())
    }

    async fn generate(&self, request: &GenerationRequest) -> ModelResult<String> {
        let response = self
            .client
            .post(self.config.endpoint("generate"))
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;
        let response = ensure_success(response).await?;
        let body = response.text().await.map_err(transport_error)?;

        if request.stream {
            collect_stream(&body)
        } else {
            let chunk: GenerateChunk = serde_json::from_str(&body)
                .map_err(|e| ModelError::new(ModelErrorKind::Decode(e.to_string())))?;
            Ok(chunk.response)
        }
    }

    async fn chat(&self, request: &ChatRequest) -> ModelResult<String> {
        let response = self
            .client
            .post(self.config.endpoint("chat"))
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;
        let response = ensure_success(response).await?;

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| ModelError::new(ModelErrorKind::Decode(e.to_string())))?;
        Ok(chat.message.content)
    }
}

#[async_trait::async_trait]
impl TextModel for OllamaClient {
    #[instrument(skip(self))]
    async fn check_connection(&self) -> bool {
        let url = self.config.endpoint("tags");
        debug!(url = %url, "Checking server connection");

        match self
            .client
            .get(&url)
            .timeout(self.config.health_timeout())
            .send()
            .await
        {
            Ok(response) => {
                let healthy = response.status() == reqwest::StatusCode::OK;
                debug!(status = %response.status(), healthy, "Health check finished");
                healthy
            }
            Err(e) => {
                warn!(error = %e, "Not able to connect to the model server");
                false
            }
        }
    }

    #[instrument(skip(self))]
    async fn list_models(&self) -> Vec<String> {
        self.try_list_models().await.unwrap_or_else(|e| {
            warn!(error = %e, "Listing models failed");
            Vec::new()
        })
    }

    #[instrument(skip(self, prompt), fields(model = %self.config.model, prompt_length = prompt.len()))]
    async fn generate_text(
        &self,
        prompt: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> ScribeResult<String> {
        let request = GenerationRequest::new(
            self.config.model.clone(),
            prompt,
            SamplingOptions::with_temperature(temperature).max_tokens(max_tokens),
        )
        .streaming(self.config.stream);

        let text = self.generate(&request).await.inspect_err(|e| {
            warn!(error = %e, "Generation failed");
        })?;
        debug!(response_length = text.len(), "Received generation");
        Ok(text)
    }

    #[instrument(skip(self, messages), fields(model = %self.config.model, turns = messages.len()))]
    async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
        temperature: f32,
    ) -> ScribeResult<String> {
        let mut request = ChatRequest::new(self.config.model.clone(), messages, temperature);
        if self.config.json_mode {
            request = request.json_mode();
        }

        let text = self.chat(&request).await.inspect_err(|e| {
            warn!(error = %e, "Chat completion failed");
        })?;
        debug!(response_length = text.len(), "Received chat completion");
        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

/// Map a reqwest failure onto a model error.
#[track_caller]
fn transport_error(err: reqwest::Error) -> ModelError {
    if err.is_timeout() {
        ModelError::new(ModelErrorKind::Timeout(err.to_string()))
    } else if err.is_decode() {
        ModelError::new(ModelErrorKind::Decode(err.to_string()))
    } else {
        ModelError::new(ModelErrorKind::Transport(err.to_string()))
    }
}

/// Pass through success responses; turn anything else into a status error.
async fn ensure_success(response: reqwest::Response) -> ModelResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    warn!(status = %status, "Server returned error status");
    Err(ModelError::new(ModelErrorKind::Status {
        status: status.as_u16(),
        body,
    }))
}

/// Join the `response` fields of an NDJSON generation stream.
fn collect_stream(body: &str) -> ModelResult<String> {
    let mut text = String::new();

    for line in body.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let chunk: GenerateChunk = serde_json::from_str(line)
            .map_err(|e| ModelError::new(ModelErrorKind::Decode(e.to_string())))?;

        if let Some(error) = chunk.error {
            return Err(ModelError::new(ModelErrorKind::Decode(error)));
        }

        text.push_str(&chunk.response);
        if chunk.done {
            break;
        }
    }

    Ok(text)
}

/// Ollama reports untagged models with an implicit `:latest` suffix.
fn model_matches(installed: &str, wanted: &str) -> bool {
    installed == wanted
        || installed
            .strip_suffix(":latest")
            .is_some_and(|base| base == wanted)
}
