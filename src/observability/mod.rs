//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! SecureLogger (secure_log) and internal diagnostics
//!     → tracing events (target "safelog")
//!     → logging.rs subscriber
//!     → stderr (pretty or JSON lines)
//! ```
//!
//! # Design Decisions
//! - One subscriber per process, installed at startup
//! - RUST_LOG wins over the configured level, except for target "safelog"

pub mod logging;

#[cfg(test)]
pub(crate) mod testing;

pub use logging::{build_filter, init_logging};
