//! Script parsing errors.

/// Reasons a model reply could not be turned into a script.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ScriptErrorKind {
    /// No JSON object could be located in the reply
    #[display("No JSON object found in reply of {} bytes", _0)]
    NoJsonFound(usize),

    /// A JSON object was located but did not parse as a script
    #[display("Invalid script JSON: {}", _0)]
    InvalidJson(String),

    /// The parsed script has no segments
    #[display("Script has no segments")]
    EmptySegments,
}

/// Script parsing error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Script Error: {} at line {} in {}", kind, line, file)]
pub struct ScriptError {
    kind: ScriptErrorKind,
    line: u32,
    file: &'static str,
}

impl ScriptError {
    /// Create a new script error with caller location tracking.
    #[track_caller]
    pub fn new(kind: ScriptErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScriptErrorKind {
        &self.kind
    }
}
