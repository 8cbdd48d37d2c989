// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_DATABASE, DEFAULT_FETCH_TIMEOUT_SECONDS, DEFAULT_USER_AGENT};
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Runtime configuration for the analyzer binary.
///
/// Every field is optional in the file; missing values fall back to built-in
/// defaults so an empty document is a valid configuration.
///
/// # Fields
/// * `data_dir` - Where the sentence model is installed (defaults to the platform data dir)
/// * `database` - SQLite file receiving status lines and reports
/// * `fetch` - Options for remote resources
/// * `max_concurrency` - Upper bound on concurrently running analyses (defaults to CPU count)
///
/// # Example
/// ```yaml
/// data_dir: /var/lib/textstat
/// database: reports.db
/// max_concurrency: 4
/// fetch:
///   user_agent: "Mozilla/5.0"
///   timeout_seconds: 10
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_dir: PathBuf,
    pub database: PathBuf,
    pub fetch: FetchConfig,
    pub max_concurrency: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            database: PathBuf::from(DEFAULT_DATABASE),
            fetch: FetchConfig::default(),
            max_concurrency: None,
        }
    }
}

/// Options for fetching remote resources.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: DEFAULT_FETCH_TIMEOUT_SECONDS,
        }
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Platform data directory for textstat, or `./.textstat` when none is known.
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "textstat")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".textstat"))
}

/// Load a config from a YAML or TOML file, picked by extension.
///
/// Anything that is not `.toml` is parsed as YAML.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    } else if content.trim().is_empty() {
        Ok(Config::default())
    } else {
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Load and validate a config file.
///
/// All validation errors are reported together.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;

    if let Err(validation_errors) = crate::config::validate_config(&cfg) {
        let error_messages: Vec<String> = validation_errors.iter().map(|e| e.to_string()).collect();
        return Err(ConfigError::Invalid(error_messages.join("\n")));
    }

    Ok(cfg)
}
