// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and operational
//! logging throughout textstat. Message types follow a struct-based pattern
//! with `Display` trait implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Keep log wording in one place per subsystem
//! * Provide consistent, structured logging output
//!
//! # Usage
//!
//! ```rust
//! use textstat::observability::messages::analysis::AnalysisFailed;
//! use textstat::observability::messages::StructuredLog;
//! use textstat::errors::AnalysisError;
//!
//! let error = AnalysisError::EmptyInput { metric: "avrg_word_length" };
//! AnalysisFailed {
//!     identifier: "notes.txt",
//!     error_kind: error.kind(),
//!     error: &error,
//! }
//! .log();
//! ```

pub mod messages;

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// Honors `RUST_LOG`; falls back to `default_directive` when it is unset or
/// unparsable. Calling it twice is harmless.
pub fn init_logging(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
