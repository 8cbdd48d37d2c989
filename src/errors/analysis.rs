// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors surfaced by a single load-and-analyze run.

use thiserror::Error;

use super::ResourceError;

/// Tagged failure cause for one analysis.
///
/// The driver never lets one of these escape as a panic or a half-built
/// report. It is carried alongside the `CRITICAL` status line so callers can
/// tell a missing file from an empty text.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Fetching or decoding the resource failed.
    #[error("resource error: {0}")]
    Resource(#[from] ResourceError),

    /// A mean was requested over an empty sequence.
    #[error("cannot compute '{metric}' over empty input")]
    EmptyInput { metric: &'static str },

    /// Anything else that went wrong while computing metrics.
    #[error("analysis failed: {0}")]
    Unclassified(String),
}

impl AnalysisError {
    /// Stable tag for logs and persisted diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::Resource(_) => "ResourceError",
            AnalysisError::EmptyInput { .. } => "EmptyInputError",
            AnalysisError::Unclassified(_) => "UnclassifiedError",
        }
    }
}
