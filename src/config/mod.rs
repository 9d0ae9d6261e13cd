//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! environment variable (APP_ENV by default)
//!     → environment.rs (EnvironmentMode, read once)
//!
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → handed to the logger, sanitizer and media helpers at startup
//! ```
//!
//! # Design Decisions
//! - Config and mode are immutable once loaded; there is no reload path
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Mode is injected into consumers rather than read per call

pub mod environment;
pub mod loader;
pub mod schema;
pub mod validation;

pub use environment::EnvironmentMode;
pub use loader::{load_config, ConfigError};
pub use schema::AppConfig;
pub use schema::EnvironmentConfig;
pub use schema::LogFormat;
pub use schema::LoggingConfig;
pub use schema::MediaConfig;
