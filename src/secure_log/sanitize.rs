//! Redaction of sensitive fields before logging.
//!
//! # Rules
//! ```text
//! production  → any input      → "[SANITIZED]"
//! development → object         → copy, truthy sensitive keys → "[REDACTED]"
//! development → anything else  → unchanged
//! ```
//!
//! Only top-level keys are inspected. Nested objects are copied as-is.

use serde::Serialize;
use serde_json::Value;

use crate::config::EnvironmentMode;

/// Replacement for a sensitive field's value.
pub const REDACTED: &str = "[REDACTED]";

/// Replacement for the whole input outside development.
pub const SANITIZED: &str = "[SANITIZED]";

/// Keys treated as confidential. Matched exactly, case-sensitive.
pub const SENSITIVE_FIELDS: &[&str] = &[
    "password",
    "token",
    "access_token",
    "refresh_token",
    "authorization",
];

/// Loose truthiness: `null`, `false`, zero and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Sanitize `data` for the given mode. Pure; never fails.
///
/// A sensitive key holding a falsy value (`""`, `0`, `false`, `null`) is left
/// as is.
pub fn sanitize_for_log(mode: EnvironmentMode, data: &Value) -> Value {
    if !mode.is_development() {
        return Value::String(SANITIZED.to_string());
    }

    match data {
        Value::Object(map) => {
            let mut sanitized = map.clone();
            for field in SENSITIVE_FIELDS {
                if let Some(value) = sanitized.get_mut(*field) {
                    if is_truthy(value) {
                        *value = Value::String(REDACTED.to_string());
                    }
                }
            }
            Value::Object(sanitized)
        }
        other => other.clone(),
    }
}

/// Sanitizer bound to an injected mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sanitizer {
    mode: EnvironmentMode,
}

impl Sanitizer {
    pub fn new(mode: EnvironmentMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> EnvironmentMode {
        self.mode
    }

    pub fn sanitize(&self, data: &Value) -> Value {
        sanitize_for_log(self.mode, data)
    }

    /// Convert any serializable value and sanitize it.
    ///
    /// Values that cannot be represented as JSON come back as `"[SANITIZED]"`.
    pub fn sanitize_serializable<T: Serialize + ?Sized>(&self, data: &T) -> Value {
        match serde_json::to_value(data) {
            Ok(value) => self.sanitize(&value),
            Err(_) => Value::String(SANITIZED.to_string()),
        }
    }
}
