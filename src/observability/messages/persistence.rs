// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the report sink.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Status line (and report, if any) persisted.
///
/// # Log Level
/// `debug!` - Routine
pub struct ReportStored<'a> {
    pub row_id: i64,
    pub status_line: &'a str,
    pub with_report: bool,
}

impl Display for ReportStored<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Stored row {} ({}report): {}",
            self.row_id,
            if self.with_report { "" } else { "no " },
            self.status_line
        )
    }
}

impl StructuredLog for ReportStored<'_> {
    fn log(&self) {
        tracing::debug!(
            row_id = self.row_id,
            with_report = self.with_report,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("report_stored", span_name = name, row_id = self.row_id)
    }
}

/// Writing to the sink failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ReportStoreFailed<'a> {
    pub status_line: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ReportStoreFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Failed to store '{}': {}", self.status_line, self.error)
    }
}

impl StructuredLog for ReportStoreFailed<'_> {
    fn log(&self) {
        tracing::error!(status_line = self.status_line, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("report_store_failed", span_name = name)
    }
}
