//! Environment-gated secure logging and media load state.

pub mod config;
pub mod media;
pub mod observability;
pub mod secure_log;

pub use config::{AppConfig, EnvironmentMode};
pub use media::{Callbacks, ImageLoader, ImageProps, ImageView, LoadState};
pub use secure_log::{sanitize_for_log, SecureLogger, Sanitizer};
