// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for sentence model setup.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::path::Path;
use tracing::Span;

/// Bundled sentence model written to disk.
///
/// # Log Level
/// `info!` - Happens once per data directory
pub struct ModelInstalled<'a> {
    pub path: &'a Path,
}

impl Display for ModelInstalled<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Installed sentence model at {}", self.path.display())
    }
}

impl StructuredLog for ModelInstalled<'_> {
    fn log(&self) {
        tracing::info!(path = %self.path.display(), "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("model_installed", span_name = name, path = %self.path.display())
    }
}

/// Sentence model loaded into memory.
///
/// # Log Level
/// `debug!` - Routine
pub struct ModelLoaded<'a> {
    pub path: &'a Path,
    pub abbreviations: usize,
    pub starters: usize,
}

impl Display for ModelLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded sentence model from {} ({} abbreviations, {} sentence starters)",
            self.path.display(),
            self.abbreviations,
            self.starters
        )
    }
}

impl StructuredLog for ModelLoaded<'_> {
    fn log(&self) {
        tracing::debug!(
            path = %self.path.display(),
            abbreviations = self.abbreviations,
            starters = self.starters,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("model_loaded", span_name = name, path = %self.path.display())
    }
}
