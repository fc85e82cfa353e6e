//! Top-level error wrapper types.

use crate::{ConfigError, JsonError, ModelError, ScriptError};

/// Every error the scribe crates can produce.
///
/// # Examples
///
/// ```
/// use scribe_error::{ModelError, ModelErrorKind, ScribeError};
///
/// let transport = ModelError::new(ModelErrorKind::Transport("Connection failed".into()));
/// let err: ScribeError = transport.into();
/// assert!(format!("{}", err).contains("Transport failure"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ScribeErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Model server error
    #[from(ModelError)]
    Model(ModelError),
    /// Script parsing error
    #[from(ScriptError)]
    Script(ScriptError),
}

/// Scribe error with kind discrimination.
///
/// # Examples
///
/// ```
/// use scribe_error::{ConfigError, ScribeErrorKind, ScribeResult};
///
/// fn might_fail() -> ScribeResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), ScribeErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Scribe Error: {}", _0)]
pub struct ScribeError(Box<ScribeErrorKind>);

impl ScribeError {
    /// Create a new error from a kind.
    pub fn new(kind: ScribeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScribeErrorKind {
        &self.0
    }

    /// Model error details, if this error came from the model server.
    pub fn model_kind(&self) -> Option<&crate::ModelErrorKind> {
        match self.kind() {
            ScribeErrorKind::Model(e) => Some(e.kind()),
            _ => None,
        }
    }
}

// Generic From implementation for any type that converts to ScribeErrorKind
impl<T> From<T> for ScribeError
where
    T: Into<ScribeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for scribe operations.
pub type ScribeResult<T> = std::result::Result<T, ScribeError>;
