// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in '{}': {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid TOML in '{}': {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Configuration validation failed:\n{0}")]
    Invalid(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The fetch timeout must allow at least one second
    ZeroTimeout,
    /// A concurrency limit of zero would never run anything
    ZeroConcurrency,
    /// Some servers reject requests without a user agent
    EmptyUserAgent,
    /// The report database path is blank
    EmptyDatabasePath,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::ZeroTimeout => {
                write!(f, "fetch.timeout_seconds must be greater than zero")
            }
            ValidationError::ZeroConcurrency => {
                write!(f, "max_concurrency must be greater than zero when set")
            }
            ValidationError::EmptyUserAgent => {
                write!(f, "fetch.user_agent must not be empty")
            }
            ValidationError::EmptyDatabasePath => {
                write!(f, "database must not be an empty path")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
