use scribe_error::{ConfigError, ScribeResult};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the console subscriber.
///
/// Logs go to stderr so stdout carries only command output. `RUST_LOG`
/// takes precedence; otherwise `verbose` selects `info,scribe=debug` and the
/// quiet default is `warn`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_telemetry(verbose: bool) -> ScribeResult<()> {
    let default_filter = if verbose {
        "info,scribe=debug,scribe_models=debug,scribe_pipeline=debug"
    } else {
        "warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose),
        )
        .try_init()
        .map_err(|e| ConfigError::new(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}
