//! The environment-gated logging facade.
//!
//! # Channels
//! - `info`, `warn`, `debug`: development only, otherwise dropped
//! - `error`: always emits; production replaces message and error with
//!   [`GENERIC_ERROR_MESSAGE`]

use std::fmt::{Debug, Display};
use std::sync::Arc;

use crate::config::EnvironmentMode;
use crate::secure_log::record::{LogRecord, Severity};
use crate::secure_log::sink::{LogSink, TracingSink};

/// The only thing `error` emits outside development.
pub const GENERIC_ERROR_MESSAGE: &str = "Application error occurred";

/// Prefix of every debug line.
pub const DEBUG_MARKER: &str = "[DEBUG]";

/// Logging facade with an injected mode and sink.
///
/// Cheap to clone; clones share the sink.
#[derive(Clone)]
pub struct SecureLogger {
    mode: EnvironmentMode,
    sink: Arc<dyn LogSink>,
}

impl SecureLogger {
    /// Logger writing through `tracing`.
    pub fn new(mode: EnvironmentMode) -> Self {
        Self::with_sink(mode, Arc::new(TracingSink))
    }

    pub fn with_sink(mode: EnvironmentMode, sink: Arc<dyn LogSink>) -> Self {
        Self { mode, sink }
    }

    pub fn mode(&self) -> EnvironmentMode {
        self.mode
    }

    pub fn info(&self, args: &[&dyn Display]) {
        self.emit_verbose(Severity::Info, None, args);
    }

    pub fn warn(&self, args: &[&dyn Display]) {
        self.emit_verbose(Severity::Warn, None, args);
    }

    pub fn debug(&self, args: &[&dyn Display]) {
        self.emit_verbose(Severity::Debug, Some(DEBUG_MARKER), args);
    }

    /// Log an error with an optional auxiliary value.
    ///
    /// In development the auxiliary value is rendered with `Debug`, or as
    /// `null` when absent.
    pub fn error(&self, message: &dyn Display, error: Option<&dyn Debug>) {
        let args = if self.mode.is_development() {
            let detail = match error {
                Some(err) => format!("{:?}", err),
                None => "null".to_string(),
            };
            vec![message.to_string(), detail]
        } else {
            vec![GENERIC_ERROR_MESSAGE.to_string()]
        };
        self.sink.emit(&LogRecord::new(Severity::Error, args));
    }

    fn emit_verbose(&self, severity: Severity, prefix: Option<&str>, args: &[&dyn Display]) {
        if !self.mode.is_development() {
            return;
        }

        let mut rendered = Vec::with_capacity(args.len() + 1);
        if let Some(prefix) = prefix {
            rendered.push(prefix.to_string());
        }
        rendered.extend(args.iter().map(|arg| arg.to_string()));
        self.sink.emit(&LogRecord::new(severity, rendered));
    }
}

impl Debug for SecureLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureLogger").field("mode", &self.mode).finish_non_exhaustive()
    }
}
