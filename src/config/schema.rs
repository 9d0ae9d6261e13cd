//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::config::environment::DEFAULT_ENV_VAR;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Where the environment mode comes from.
    pub environment: EnvironmentConfig,

    /// Subscriber settings for the diagnostic channel.
    pub logging: LoggingConfig,

    /// Defaults for image loading and URL resolution.
    pub media: MediaConfig,
}

/// Environment mode source.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Name of the variable compared against `"development"`.
    pub variable: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            variable: DEFAULT_ENV_VAR.to_string(),
        }
    }
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: String,

    /// Human-readable or JSON lines.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Media configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct MediaConfig {
    /// Placeholder locator used when props don't name one.
    pub placeholder: String,

    /// Fallback for empty image URLs.
    pub default_avatar: String,

    /// Text shown by the error placeholder.
    pub error_message: String,

    /// Hosts whose absolute URLs still receive a cache buster.
    pub local_hosts: Vec<String>,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            placeholder: "/placeholder.jpg".to_string(),
            default_avatar: "/default-avatar.png".to_string(),
            error_message: "Error loading image".to_string(),
            local_hosts: vec!["localhost".to_string(), "127.0.0.1".to_string()],
        }
    }
}
