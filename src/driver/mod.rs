// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Report driver: resolve, load, analyze, and always come back with a
//! terminal outcome.
//!
//! ```text
//! NotStarted → ResourceResolved → TextLoaded → MetricsComputed
//!                     │                │
//!                     └────────────────┴──────→ Failed
//! ```
//!
//! A failure never leaves a partial report behind; the caller gets the
//! `CRITICAL` status line together with the tagged [`AnalysisError`].
//! The status line carries the kind the loader reports once text is loaded,
//! and the kind classified from the identifier before that.

mod status;

pub use status::{StatusLevel, StatusLine};

use chrono::Local;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;

use crate::analysis::{Analyzer, Report, SentenceModel};
use crate::errors::AnalysisError;
use crate::observability::messages::{
    analysis::{AnalysisFailed, AnalysisStarted, ReportGenerated, StateTransition},
    StructuredLog,
};
use crate::resource::{LoadedResource, ResourceKind};
use crate::traits::ResourceLoader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisState {
    NotStarted,
    ResourceResolved,
    TextLoaded,
    MetricsComputed,
    Failed,
}

impl AnalysisState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisState::NotStarted => "NOT_STARTED",
            AnalysisState::ResourceResolved => "RESOURCE_RESOLVED",
            AnalysisState::TextLoaded => "TEXT_LOADED",
            AnalysisState::MetricsComputed => "METRICS_COMPUTED",
            AnalysisState::Failed => "FAILED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, AnalysisState::MetricsComputed | AnalysisState::Failed)
    }
}

/// Terminal result of one analysis.
#[derive(Debug)]
pub enum AnalysisOutcome {
    Success {
        status_line: StatusLine,
        report: Report,
    },
    Failure {
        status_line: StatusLine,
        error: AnalysisError,
    },
}

impl AnalysisOutcome {
    pub fn status_line(&self) -> &StatusLine {
        match self {
            AnalysisOutcome::Success { status_line, .. } => status_line,
            AnalysisOutcome::Failure { status_line, .. } => status_line,
        }
    }

    pub fn report(&self) -> Option<&Report> {
        match self {
            AnalysisOutcome::Success { report, .. } => Some(report),
            AnalysisOutcome::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&AnalysisError> {
        match self {
            AnalysisOutcome::Success { .. } => None,
            AnalysisOutcome::Failure { error, .. } => Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisOutcome::Success { .. })
    }

    pub fn state(&self) -> AnalysisState {
        match self {
            AnalysisOutcome::Success { .. } => AnalysisState::MetricsComputed,
            AnalysisOutcome::Failure { .. } => AnalysisState::Failed,
        }
    }
}

struct Run<'a> {
    identifier: &'a str,
    kind: ResourceKind,
    state: AnalysisState,
}

impl Run<'_> {
    fn advance(&mut self, to: AnalysisState) {
        StateTransition {
            identifier: self.identifier,
            from: self.state.as_str(),
            to: to.as_str(),
        }
        .log();
        self.state = to;
    }
}

/// Drives one identifier from resolution to a terminal [`AnalysisOutcome`].
///
/// Holds no per-run state, so one driver can serve many concurrent analyses.
#[derive(Clone)]
pub struct ReportDriver {
    loader: Arc<dyn ResourceLoader>,
    analyzer: Analyzer,
}

impl ReportDriver {
    pub fn new(loader: Arc<dyn ResourceLoader>, model: Arc<SentenceModel>) -> Self {
        Self {
            loader,
            analyzer: Analyzer::new(model),
        }
    }

    pub async fn analyze(&self, identifier: &str) -> AnalysisOutcome {
        let start_msg = AnalysisStarted { identifier };
        let span = start_msg.span("analyze");
        start_msg.log();

        self.drive(identifier).instrument(span).await
    }

    async fn drive(&self, identifier: &str) -> AnalysisOutcome {
        let timestamp = Local::now();
        let started = Instant::now();

        let mut run = Run {
            identifier,
            kind: ResourceKind::classify(identifier),
            state: AnalysisState::NotStarted,
        };
        run.advance(AnalysisState::ResourceResolved);

        let result = self.load_and_analyze(&mut run).await;
        let level = if result.is_ok() {
            StatusLevel::Info
        } else {
            StatusLevel::Critical
        };
        let status_line = StatusLine::new(timestamp, run.kind, identifier, level);

        match result {
            Ok(report) => {
                run.advance(AnalysisState::MetricsComputed);
                ReportGenerated {
                    identifier,
                    sentences: report.number_of_sentences,
                    words: report.number_of_words,
                    duration: started.elapsed(),
                }
                .log();
                AnalysisOutcome::Success {
                    status_line,
                    report,
                }
            }
            Err(error) => {
                run.advance(AnalysisState::Failed);
                AnalysisFailed {
                    identifier,
                    error_kind: error.kind(),
                    error: &error,
                }
                .log();
                AnalysisOutcome::Failure { status_line, error }
            }
        }
    }

    async fn load_and_analyze(&self, run: &mut Run<'_>) -> Result<Report, AnalysisError> {
        let loaded = self.load(run.identifier).await?;
        run.kind = loaded.kind;
        run.advance(AnalysisState::TextLoaded);

        // A panic inside the pipeline is a bug, but it must still end in CRITICAL.
        panic::catch_unwind(AssertUnwindSafe(|| self.analyzer.run(&loaded.text)))
            .unwrap_or_else(|payload| Err(AnalysisError::Unclassified(panic_message(&*payload))))
    }

    /// Load on its own task so a panicking loader surfaces as a `JoinError`.
    async fn load(&self, identifier: &str) -> Result<LoadedResource, AnalysisError> {
        let loader = Arc::clone(&self.loader);
        let owned = identifier.to_string();
        match tokio::spawn(async move { loader.load(&owned).await }.in_current_span()).await {
            Ok(loaded) => Ok(loaded?),
            Err(join_error) if join_error.is_panic() => Err(AnalysisError::Unclassified(
                panic_message(&*join_error.into_panic()),
            )),
            Err(join_error) => Err(AnalysisError::Unclassified(join_error.to_string())),
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic during analysis".to_string()
    }
}
