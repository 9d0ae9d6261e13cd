//! Shared utilities for integration tests.

use std::sync::Arc;

use safelog::config::EnvironmentMode;
use safelog::secure_log::{MemorySink, SecureLogger};

/// Logger wired to an in-memory sink.
pub fn capturing_logger(mode: EnvironmentMode) -> (SecureLogger, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    (SecureLogger::with_sink(mode, sink.clone()), sink)
}

/// Every rendered line the sink saw, joined for substring checks.
#[allow(dead_code)]
pub fn transcript(sink: &MemorySink) -> String {
    sink.lines().join("\n")
}
