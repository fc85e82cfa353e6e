//! CLI command handling.

mod commands;
mod run;

pub use commands::{Cli, Commands, DEFAULT_TOPIC};
pub use run::dispatch;
