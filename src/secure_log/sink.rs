//! Log sinks.
//!
//! The default sink forwards to `tracing`; the subscriber installed by
//! [`crate::observability::init_logging`] writes it to stderr.

use std::sync::Mutex;

use crate::secure_log::record::{LogRecord, Severity};

/// Destination for records that passed the mode gate.
///
/// Implementations must not panic; a sink that cannot write drops the record.
pub trait LogSink: Send + Sync {
    fn emit(&self, record: &LogRecord);
}

/// Forwards records to `tracing` under target `safelog`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, record: &LogRecord) {
        let message = record.message();
        match record.severity {
            Severity::Debug => tracing::debug!(target: "safelog", "{}", message),
            Severity::Info => tracing::info!(target: "safelog", "{}", message),
            Severity::Warn => tracing::warn!(target: "safelog", "{}", message),
            Severity::Error => tracing::error!(target: "safelog", "{}", message),
        }
    }
}

/// Keeps every record in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    pub fn records(&self) -> Vec<LogRecord> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Rendered lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.records().iter().map(LogRecord::message).collect()
    }

    pub fn clear(&self) {
        if let Ok(mut records) = self.records.lock() {
            records.clear();
        }
    }
}

impl LogSink for MemorySink {
    fn emit(&self, record: &LogRecord) {
        // A poisoned lock only means another writer panicked; keep recording.
        let mut records = match self.records.lock() {
            Ok(records) => records,
            Err(poisoned) => poisoned.into_inner(),
        };
        records.push(record.clone());
    }
}
