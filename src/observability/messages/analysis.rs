// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the report driver lifecycle.
//!
//! This module contains message types for logging events related to:
//! * Analysis start and state transitions
//! * Report completion with timing
//! * Failures, tagged with their cause

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Analysis of one resource started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use textstat::observability::messages::analysis::AnalysisStarted;
///
/// let msg = AnalysisStarted { identifier: "notes.txt" };
/// tracing::info!("{}", msg);
/// ```
pub struct AnalysisStarted<'a> {
    pub identifier: &'a str,
}

impl Display for AnalysisStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "working with file {}", self.identifier)
    }
}

impl StructuredLog for AnalysisStarted<'_> {
    fn log(&self) {
        tracing::info!(identifier = self.identifier, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("analysis", span_name = name, identifier = self.identifier)
    }
}

/// The driver moved between states.
///
/// # Log Level
/// `debug!` - Step-level detail
pub struct StateTransition<'a> {
    pub identifier: &'a str,
    pub from: &'a str,
    pub to: &'a str,
}

impl Display for StateTransition<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "'{}': {} -> {}", self.identifier, self.from, self.to)
    }
}

impl StructuredLog for StateTransition<'_> {
    fn log(&self) {
        tracing::debug!(
            identifier = self.identifier,
            from = self.from,
            to = self.to,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "state_transition",
            span_name = name,
            identifier = self.identifier,
            from = self.from,
            to = self.to,
        )
    }
}

/// Report generated successfully.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use textstat::observability::messages::analysis::ReportGenerated;
/// use std::time::Duration;
///
/// let msg = ReportGenerated {
///     identifier: "notes.txt",
///     sentences: 12,
///     words: 140,
///     duration: Duration::from_millis(3),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ReportGenerated<'a> {
    pub identifier: &'a str,
    pub sentences: usize,
    pub words: usize,
    pub duration: Duration,
}

impl Display for ReportGenerated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "time to generate report for file {}: {} ms ({} sentences, {} words)",
            self.identifier,
            self.duration.as_millis(),
            self.sentences,
            self.words
        )
    }
}

impl StructuredLog for ReportGenerated<'_> {
    fn log(&self) {
        tracing::info!(
            identifier = self.identifier,
            sentences = self.sentences,
            words = self.words,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "report_generated",
            span_name = name,
            identifier = self.identifier,
            duration_ms = self.duration.as_millis() as u64,
        )
    }
}

/// Analysis failed; the cause is logged before it collapses into a CRITICAL status line.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use textstat::observability::messages::analysis::AnalysisFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
/// let msg = AnalysisFailed {
///     identifier: "missing.txt",
///     error_kind: "ResourceError",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct AnalysisFailed<'a> {
    pub identifier: &'a str,
    pub error_kind: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for AnalysisFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Analysis of '{}' failed ({}): {}",
            self.identifier, self.error_kind, self.error
        )
    }
}

impl StructuredLog for AnalysisFailed<'_> {
    fn log(&self) {
        tracing::error!(
            identifier = self.identifier,
            error_kind = self.error_kind,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "analysis_failed",
            span_name = name,
            identifier = self.identifier,
            error_kind = self.error_kind,
        )
    }
}
