//! Core data types for the scribe pipeline.
//!
//! Request types serialize directly into the bodies the local inference
//! server expects; script types describe the structured record the pipeline
//! always returns.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod message;
mod request;
mod result;
mod role;
mod script;

pub use message::ChatMessage;
pub use request::{ChatRequest, GenerationRequest, SamplingOptions};
pub use result::PipelineResult;
pub use role::Role;
pub use script::{ScriptRecord, Segment};
