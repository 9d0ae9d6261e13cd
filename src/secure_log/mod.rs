//! Environment-gated logging facade and log sanitization.
//!
//! # Data Flow
//! ```text
//! call site
//!     → sanitize.rs (explicit, caller's choice)
//!     → logger.rs (mode gate, message shaping)
//!     → sink.rs (TracingSink → stderr, MemorySink → Vec)
//! ```
//!
//! # Design Decisions
//! - The logger never sanitizes its arguments implicitly
//! - Production collapses error details into one generic line
//! - Logging cannot fail from the caller's point of view

pub mod logger;
pub mod macros;
pub mod record;
pub mod sanitize;
pub mod sink;

pub use logger::{SecureLogger, GENERIC_ERROR_MESSAGE};
pub use record::{LogRecord, Severity};
pub use sanitize::{is_truthy, sanitize_for_log, Sanitizer, REDACTED, SANITIZED, SENSITIVE_FIELDS};
pub use sink::{LogSink, MemorySink, TracingSink};
