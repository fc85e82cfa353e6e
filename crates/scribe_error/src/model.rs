//! Model server errors.

/// Error conditions raised while talking to the local inference server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ModelErrorKind {
    /// Server could not be reached at the given address
    #[display("Server not reachable at {}", _0)]
    ServerNotRunning(String),

    /// Configured model is not installed on the server
    #[display("Model not found: {}", _0)]
    ModelNotFound(String),

    /// Request could not be sent or the connection dropped
    #[display("Transport failure: {}", _0)]
    Transport(String),

    /// Request exceeded the configured time limit
    #[display("Request timed out: {}", _0)]
    Timeout(String),

    /// Server answered with a non-success status
    #[display("{} - {}", status, body)]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// Response body did not have the expected shape
    #[display("Failed to decode response: {}", _0)]
    Decode(String),

    /// Invalid client configuration
    #[display("Invalid configuration: {}", _0)]
    InvalidConfiguration(String),
}

/// Model server error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Model Error: {} at {}:{}", kind, file, line)]
pub struct ModelError {
    /// The specific error kind
    pub kind: ModelErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ModelError {
    /// Create a new model error.
    #[track_caller]
    pub fn new(kind: ModelErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ModelErrorKind {
        &self.kind
    }
}

/// Result type for model server operations.
pub type ModelResult<T> = Result<T, ModelError>;
