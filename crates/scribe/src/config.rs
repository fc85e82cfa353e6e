//! Layered configuration.
//!
//! Sources, later ones overriding earlier ones:
//! - Built-in defaults
//! - `~/.config/scribe/scribe.toml`
//! - `./scribe.toml`
//! - `SCRIBE_*` environment variables, `__` separating sections
//!   (e.g. `SCRIBE_CLIENT__MODEL=mistral`)
//!
//! ```toml
//! [client]
//! base_url = "http://127.0.0.1:11434/api"
//! model = "llama3.2-vision"
//! timeout_secs = 120
//!
//! [pipeline]
//! script_temperature = 0.8
//! extractor = "balanced"
//! ```

use config::{Config, Environment, File, FileFormat};
use scribe_error::{ConfigError, ScribeResult};
use scribe_models::ClientConfig;
use scribe_pipeline::PipelineSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Name of the configuration file looked up in the working directory and
/// the user config directory.
pub const CONFIG_FILE_NAME: &str = "scribe.toml";

/// Everything the binary can be configured with.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScribeConfig {
    /// Inference server connection
    pub client: ClientConfig,
    /// Sampling and extraction settings
    pub pipeline: PipelineSettings,
}

impl ScribeConfig {
    /// Load from the user file, the local file, and the environment.
    ///
    /// Missing files are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if a file or variable cannot be parsed, or the
    /// resulting values are out of range.
    #[instrument]
    pub fn load() -> ScribeResult<Self> {
        let mut files = Vec::new();
        if let Some(user) = Self::user_config_path() {
            files.push(user);
        }
        files.push(PathBuf::from(CONFIG_FILE_NAME));

        Self::build(&files, Some(environment()))
    }

    /// Load from a single TOML file, ignoring the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unparsable, or out of range.
    pub fn from_file(path: impl AsRef<Path>) -> ScribeResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::new(format!(
                "Configuration file not found: {}",
                path.display()
            ))
            .into());
        }
        Self::build(&[path.to_path_buf()], None)
    }

    /// `~/.config/scribe/scribe.toml` (platform equivalent), if a config
    /// directory exists.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("scribe").join(CONFIG_FILE_NAME))
    }

    /// Apply command-line overrides and re-check the result.
    ///
    /// # Errors
    ///
    /// Returns an error if an override is invalid (e.g. a non-http URL).
    pub fn with_overrides(
        mut self,
        model: Option<String>,
        base_url: Option<String>,
    ) -> ScribeResult<Self> {
        if let Some(model) = model {
            self.client.model = model;
        }
        if let Some(base_url) = base_url {
            self.client.base_url = base_url;
        }
        self.validate()
    }

    fn build(files: &[PathBuf], env: Option<Environment>) -> ScribeResult<Self> {
        let mut builder = Config::builder();
        for path in files {
            debug!(path = %path.display(), "Adding configuration file");
            builder = builder.add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }
        if let Some(env) = env {
            builder = builder.add_source(env);
        }

        let loaded: ScribeConfig = builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| ConfigError::new(format!("Failed to load configuration: {}", e)))?;

        loaded.validate()
    }

    fn validate(self) -> ScribeResult<Self> {
        let pipeline = self.pipeline;
        for (name, value) in [
            ("research_temperature", pipeline.research_temperature),
            ("script_temperature", pipeline.script_temperature),
        ] {
            if !(0.0..=2.0).contains(&value) {
                return Err(ConfigError::new(format!(
                    "{} must be between 0.0 and 2.0, got {}",
                    name, value
                ))
                .into());
            }
        }
        if pipeline.research_max_tokens == 0 {
            return Err(ConfigError::new("research_max_tokens must be positive").into());
        }

        let client = self
            .client
            .validated()
            .map_err(|e| ConfigError::new(e.kind.to_string()))?;

        Ok(Self { client, pipeline })
    }
}

/// `SCRIBE_` prefix, `__` between section and key.
fn environment() -> Environment {
    Environment::with_prefix("SCRIBE")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
