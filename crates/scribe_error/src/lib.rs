//! Error types for the scribe pipeline.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use scribe_error::{ModelError, ModelErrorKind, ScribeResult};
//!
//! fn fetch_tags() -> ScribeResult<String> {
//!     Err(ModelError::new(ModelErrorKind::Transport("Connection refused".into())))?
//! }
//!
//! assert!(fetch_tags().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod json;
mod model;
mod script;

pub use config::ConfigError;
pub use error::{ScribeError, ScribeErrorKind, ScribeResult};
pub use json::JsonError;
pub use model::{ModelError, ModelErrorKind, ModelResult};
pub use script::{ScriptError, ScriptErrorKind};
