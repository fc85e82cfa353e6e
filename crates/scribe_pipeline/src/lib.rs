//! Research and script generation for scribe.
//!
//! A run is two sequential model calls: [`Researcher`] asks the generation
//! endpoint for narration-ready research, then [`ScriptBuilder`] asks the chat
//! endpoint to turn that research into a [`scribe_core::ScriptRecord`].
//! [`ScriptPipeline`] wires the two together.
//!
//! The script builder never fails: unparsable replies are replaced by a
//! deterministic template record (see [`fallback_script`]).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extraction;
mod fallback;
mod pipeline;
mod prompts;
mod research;
mod script;
mod settings;

pub use extraction::{BalancedExtractor, BraceSpanExtractor, ExtractorKind};
pub use fallback::fallback_script;
pub use pipeline::ScriptPipeline;
pub use prompts::{SCRIPT_SYSTEM_PROMPT, research_prompt, script_user_prompt};
pub use research::Researcher;
pub use script::{ScriptBuilder, parse_script};
pub use settings::PipelineSettings;
