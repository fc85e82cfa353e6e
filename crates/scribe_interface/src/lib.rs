//! Trait definitions for the scribe pipeline.
//!
//! `TextModel` is the seam between the pipeline and the inference server,
//! and `JsonExtractor` is the seam between raw model text and the script
//! parser. `DisplayText` collapses a tagged model result into text for
//! interactive display.

mod display;
mod traits;

pub use display::DisplayText;
pub use traits::{JsonExtractor, TextModel};
