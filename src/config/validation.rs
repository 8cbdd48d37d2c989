// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration validation.
//!
//! All checks run so a user sees every problem in one pass instead of fixing
//! them one at a time.

use crate::config::Config;
use crate::errors::ValidationError;
use crate::observability::messages::{validation::ConfigValueRejected, StructuredLog};

/// Validate a loaded configuration, collecting every error.
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.fetch.timeout_seconds == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.max_concurrency == Some(0) {
        errors.push(ValidationError::ZeroConcurrency);
    }

    if config.fetch.user_agent.trim().is_empty() {
        errors.push(ValidationError::EmptyUserAgent);
    }

    if config.database.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyDatabasePath);
    }

    for error in &errors {
        ConfigValueRejected { error }.log();
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
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = Config::default();
        config.fetch.timeout_seconds = 0;
        config.max_concurrency = Some(0);
        config.database = PathBuf::new();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::ZeroTimeout,
                ValidationError::ZeroConcurrency,
                ValidationError::EmptyDatabasePath,
            ]
        );
    }

    #[test]
    fn test_blank_user_agent_rejected() {
        let mut config = Config::default();
        config.fetch.user_agent = "   ".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::EmptyUserAgent]);
    }
}
