//! Variadic call-site macros over [`SecureLogger`](crate::secure_log::SecureLogger).
//!
//! ```
//! use safelog::{secure_debug, secure_error, EnvironmentMode, SecureLogger};
//!
//! let log = SecureLogger::new(EnvironmentMode::Production);
//! secure_debug!(log, "cache miss", 3);
//! secure_error!(log, "upload failed", std::io::Error::other("disk full"));
//! ```

#[macro_export]
macro_rules! secure_info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.info(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! secure_warn {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.warn(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! secure_debug {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.debug(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! secure_error {
    ($logger:expr, $message:expr $(,)?) => {
        $logger.error(&$message, None)
    };
    ($logger:expr, $message:expr, $error:expr $(,)?) => {
        $logger.error(&$message, Some(&$error as &dyn ::std::fmt::Debug))
    };
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::config::EnvironmentMode;
    use crate::secure_log::{MemorySink, SecureLogger, Severity};

    #[test]
    fn test_macros_route_to_channels() {
        let sink = Arc::new(MemorySink::new());
        let log = SecureLogger::with_sink(EnvironmentMode::Development, sink.clone());

        secure_info!(log, "a", 1);
        secure_warn!(log, "b");
        secure_debug!(log, "c", 2.5,);
        secure_error!(log, "d");
        secure_error!(log, "e", "why");
        secure_info!(log);

        let records = sink.records();
        let severities: Vec<_> = records.iter().map(|r| r.severity).collect();
        assert_eq!(
            severities,
            vec![Severity::Info, Severity::Warn, Severity::Debug, Severity::Error, Severity::Error, Severity::Info]
        );
        assert_eq!(records[0].message(), "a 1");
        assert_eq!(records[2].message(), "[DEBUG] c 2.5");
        assert_eq!(records[3].message(), "d null");
        assert_eq!(records[4].message(), "e \"why\"");
        assert_eq!(records[5].message(), "");
    }
}
