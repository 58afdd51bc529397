// ABOUTME: Logging setup - installs a tracing-subscriber fmt layer.
// ABOUTME: The filter string follows tracing's env-filter directive syntax.

use tracing_subscriber::EnvFilter;

/// Parse a log filter directive such as `"info"` or `"quill=debug,warn"`.
pub fn parse_filter(log_filter: &str) -> anyhow::Result<EnvFilter> {
    EnvFilter::try_new(log_filter)
        .map_err(|e| anyhow::anyhow!("invalid log filter '{log_filter}': {e}"))
}

/// Install the global `tracing` subscriber.
///
/// Fails on an invalid directive or if a subscriber is already installed.
pub fn init_tracing(log_filter: &str) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(parse_filter(log_filter)?)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing subscriber: {e}"))
}
