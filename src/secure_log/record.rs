//! Log records as handed to sinks.

use std::fmt;

use serde::Serialize;

/// Severity channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        };
        f.write_str(s)
    }
}

/// One emitted line. Arguments are already rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    pub severity: Severity,
    pub args: Vec<String>,
}

impl LogRecord {
    pub fn new(severity: Severity, args: Vec<String>) -> Self {
        Self { severity, args }
    }

    /// Space-joined line, the way a diagnostic console prints variadic args.
    pub fn message(&self) -> String {
        self.args.join(" ")
    }
}
