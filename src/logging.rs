use color_eyre::eyre::{Result, eyre};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `HOSTSTAT_LOG=debug`.
pub const LOG_ENV: &str = "HOSTSTAT_LOG";

/// Installs the global subscriber. Logs go to stderr so the report on
/// stdout stays clean.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| eyre!("failed to set tracing subscriber: {e}"))
}
