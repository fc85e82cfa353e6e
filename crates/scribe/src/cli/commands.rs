//! CLI command definitions.

use clap::{Parser, Subcommand};

/// Topic used when none is given.
pub const DEFAULT_TOPIC: &str = "The History of the Internet";

/// scribe - research a topic with a local LLM and draft a YouTube script
#[derive(Parser, Debug)]
#[command(name = "scribe")]
#[command(about = "Research a topic with a local LLM and draft a YouTube script", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute (defaults to generating a script for the default topic)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Model identifier, overriding configuration
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Server API root, overriding configuration (e.g. http://127.0.0.1:11434/api)
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Research a topic and generate a script
    Generate {
        /// Topic of the video
        #[arg(long, default_value = DEFAULT_TOPIC)]
        topic: String,

        /// Print the full result as JSON instead of previews
        #[arg(long)]
        json: bool,
    },

    /// Check that the server is reachable and the model is installed
    Check,

    /// List models installed on the server
    Models,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_default_run() {
        let cli = Cli::try_parse_from(["scribe"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn generate_defaults_topic() {
        let cli = Cli::try_parse_from(["scribe", "generate"]).unwrap();
        match cli.command {
            Some(Commands::Generate { topic, json }) => {
                assert_eq!(topic, DEFAULT_TOPIC);
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_overrides_after_subcommand() {
        let cli = Cli::try_parse_from([
            "scribe",
            "generate",
            "--topic",
            "Coffee",
            "--model",
            "mistral",
            "--base-url",
            "http://localhost:11434/api",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.model.as_deref(), Some("mistral"));
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:11434/api"));
        assert!(cli.verbose);
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
