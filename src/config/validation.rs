//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (known log levels, non-empty locators)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::media::url::default_avatar_stem;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// A single semantic problem in a config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("environment.variable must not be empty")]
    EmptyEnvironmentVariable,

    #[error("logging.level `{0}` is not one of trace, debug, info, warn, error, off")]
    UnknownLogLevel(String),

    #[error("media.{0} must not be empty")]
    EmptyMediaField(&'static str),

    #[error("media.{0} `{1}` has no file name")]
    MissingFileName(&'static str, String),
}

/// Check every section; collect all failures.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.environment.variable.trim().is_empty() {
        errors.push(ValidationError::EmptyEnvironmentVariable);
    }

    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(config.logging.level.clone()));
    }

    if config.media.placeholder.is_empty() {
        errors.push(ValidationError::EmptyMediaField("placeholder"));
    }
    if config.media.default_avatar.is_empty() {
        errors.push(ValidationError::EmptyMediaField("default_avatar"));
    } else if default_avatar_stem(&config.media.default_avatar).is_none() {
        errors.push(ValidationError::MissingFileName(
            "default_avatar",
            config.media.default_avatar.clone(),
        ));
    }
    if config.media.error_message.is_empty() {
        errors.push(ValidationError::EmptyMediaField("error_message"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&AppConfig::default()), Ok(()));
    }

    #[test]
    fn test_reports_every_problem() {
        let mut config = AppConfig::default();
        config.environment.variable = "  ".into();
        config.logging.level = "loud".into();
        config.media.error_message.clear();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyEnvironmentVariable,
                ValidationError::UnknownLogLevel("loud".into()),
                ValidationError::EmptyMediaField("error_message"),
            ]
        );
    }

    #[test]
    fn test_default_avatar_needs_file_name() {
        let mut config = AppConfig::default();
        config.media.default_avatar = "/avatars/".into();
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::MissingFileName("default_avatar", "/avatars/".into())])
        );
    }

    #[test]
    fn test_level_is_case_insensitive() {
        let mut config = AppConfig::default();
        config.logging.level = "WARN".into();
        assert!(validate_config(&config).is_ok());
    }
}
