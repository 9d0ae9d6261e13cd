//! Process-wide environment mode.
//!
//! The mode is resolved once at startup from a single environment variable
//! and then passed by value to whatever needs it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Literal that selects development mode. Nothing else is distinguished.
pub const DEVELOPMENT: &str = "development";

/// Default environment variable consulted by [`EnvironmentMode::from_env`].
pub const DEFAULT_ENV_VAR: &str = "APP_ENV";

/// Development vs. everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentMode {
    Development,
    #[default]
    Production,
}

impl EnvironmentMode {
    /// Classify a raw environment value. Exact, case-sensitive match.
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some(DEVELOPMENT) => EnvironmentMode::Development,
            _ => EnvironmentMode::Production,
        }
    }

    /// Read `var` from the process environment.
    ///
    /// Call this once during startup and inject the result.
    pub fn from_env(var: &str) -> Self {
        let value = std::env::var(var).ok();
        Self::from_value(value.as_deref())
    }

    pub fn is_development(self) -> bool {
        self == EnvironmentMode::Development
    }
}

impl fmt::Display for EnvironmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvironmentMode::Development => write!(f, "development"),
            EnvironmentMode::Production => write!(f, "production"),
        }
    }
}

impl FromStr for EnvironmentMode {
    type Err = String;

    /// Strict parser used by CLI overrides; unlike [`from_value`](Self::from_value)
    /// it rejects unknown names instead of folding them into production.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" | "dev" => Ok(EnvironmentMode::Development),
            "production" | "prod" => Ok(EnvironmentMode::Production),
            other => Err(format!("unknown environment mode: {}", other)),
        }
    }
}
