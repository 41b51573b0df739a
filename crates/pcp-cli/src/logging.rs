//! Subscriber setup for the estimator binary.

use pcp_rules::LogFormat;
use pcp_rules::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over the configured filter.
/// Logs go to stderr so stdout stays machine-readable.
pub fn init_logging(config: &LoggingConfig, verbose: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| {
        let directives = if verbose { "pcp_rules=debug,pcp_cli=debug" } else { config.filter.as_str() };
        EnvFilter::try_new(directives)
    })?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    result.map_err(|err| anyhow::anyhow!("Failed to initialize logging: {err}"))
}
