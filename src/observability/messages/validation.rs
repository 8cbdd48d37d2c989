// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration validation errors.

use crate::errors::ValidationError;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A configuration value was rejected.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use textstat::errors::ValidationError;
/// use textstat::observability::messages::validation::ConfigValueRejected;
///
/// let error = ValidationError::ZeroTimeout;
/// let msg = ConfigValueRejected { error: &error };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ConfigValueRejected<'a> {
    pub error: &'a ValidationError,
}

impl Display for ConfigValueRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Invalid configuration: {}", self.error)
    }
}

impl StructuredLog for ConfigValueRejected<'_> {
    fn log(&self) {
        tracing::error!(error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "config_validation",
            name = name,
            error = %self.error,
        )
    }
}
