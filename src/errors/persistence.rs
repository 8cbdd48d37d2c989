// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors from the report sink.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The sink's connection lock was poisoned by a panicking writer.
    #[error("report sink is unavailable: {0}")]
    Unavailable(String),
}
