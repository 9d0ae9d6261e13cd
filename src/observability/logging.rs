//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber on stderr
//! - Pick pretty or JSON output from config
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Log level configurable via config and environment
//! - The `safelog` target always passes the filter; the secure logger's
//!   environment mode is the only gate on its channels
//! - Installation is idempotent; a second call is a no-op

use tracing_subscriber::{filter::Directive, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Target used by [`crate::secure_log::TracingSink`].
pub const SECURE_LOG_TARGET: &str = "safelog";

/// Build the filter: `RUST_LOG` if set and valid, otherwise the config level.
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(rust_log.as_deref(), config)
}

/// Same as [`build_filter`] with the `RUST_LOG` value passed in.
pub fn filter_from(rust_log: Option<&str>, config: &LoggingConfig) -> EnvFilter {
    let filter = rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(config.level.to_ascii_lowercase()));

    match format!("{}=trace", SECURE_LOG_TARGET).parse::<Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Install the global subscriber.
///
/// Returns `false` when a subscriber was already installed.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let filter = build_filter(config);
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match config.format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .is_ok(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
            .is_ok(),
    };

    if installed {
        tracing::debug!(level = %config.level, format = ?config.format, "Logging initialized");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnvironmentMode;
    use crate::observability::testing::BufferWriter;
    use crate::secure_log::SecureLogger;
    use crate::{secure_debug, secure_info};

    fn capture_with(rust_log: Option<&str>, config: &LoggingConfig, f: impl FnOnce()) -> String {
        let buffer = BufferWriter::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::registry().with(filter_from(rust_log, config)).with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .without_time()
                .with_writer(move || writer.clone()),
        );
        tracing::subscriber::with_default(subscriber, f);
        buffer.contents()
    }

    #[test]
    fn test_debug_channel_survives_rust_log_info() {
        let log = SecureLogger::new(EnvironmentMode::Development);
        let out = capture_with(Some("info"), &LoggingConfig::default(), || {
            secure_debug!(log, "x", 1);
        });
        assert!(out.contains("[DEBUG] x 1"), "captured: {:?}", out);
    }

    #[test]
    fn test_secure_channels_survive_warn_level() {
        let config = LoggingConfig {
            level: "warn".into(),
            ..LoggingConfig::default()
        };
        let log = SecureLogger::new(EnvironmentMode::Development);
        let out = capture_with(None, &config, || {
            secure_info!(log, "visible");
            tracing::info!(target: "elsewhere", "filtered");
        });
        assert!(out.contains("visible"));
        assert!(!out.contains("filtered"));
    }

    #[test]
    fn test_production_mode_still_gates() {
        let log = SecureLogger::new(EnvironmentMode::Production);
        let out = capture_with(Some("trace"), &LoggingConfig::default(), || {
            secure_debug!(log, "hidden");
        });
        assert!(!out.contains("hidden"));
    }

    #[test]
    fn test_blank_rust_log_falls_back_to_config() {
        let config = LoggingConfig {
            level: "error".into(),
            ..LoggingConfig::default()
        };
        let out = capture_with(Some("  "), &config, || {
            tracing::warn!(target: "elsewhere", "dropped");
            tracing::error!(target: "elsewhere", "kept");
        });
        assert!(!out.contains("dropped"));
        assert!(out.contains("kept"));
    }

    #[test]
    fn test_second_init_is_noop() {
        let config = LoggingConfig::default();
        let _ = init_logging(&config);
        assert!(!init_logging(&config));
    }
}
