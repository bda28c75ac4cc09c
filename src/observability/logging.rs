//! # Logging
//!
//! Tracing subscriber initialization.
//!
//! Logs go to stderr so rendered manifests on stdout stay clean. `RUST_LOG`
//! takes precedence over the configured level.

use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, LogFormat, LogLevel};

/// Filter used when `RUST_LOG` is not set
#[must_use]
pub fn default_filter(level: LogLevel) -> String {
    format!(
        "warn,strimzi_kafka_provider={}",
        level.as_filter_directive()
    )
}

/// Install the global tracing subscriber
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &AppConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(config.log_level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.with_ansi(config.log_enable_color).try_init(),
    };
    result.map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(
            default_filter(LogLevel::Debug),
            "warn,strimzi_kafka_provider=debug"
        );
    }

    #[test]
    fn test_default_filter_parses() {
        for level in [LogLevel::Error, LogLevel::Info, LogLevel::Trace] {
            let filter = EnvFilter::try_new(default_filter(level));
            assert!(filter.is_ok(), "filter for {level} should parse");
        }
    }
}
