// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! `StructuredLog` to emit it with typed fields at the right level.
//!
//! # Organization
//!
//! * `analysis` - Report driver lifecycle (state transitions, completion, failure)
//! * `model` - Sentence model installation and loading
//! * `resource` - Resource classification and fetching
//! * `persistence` - Report sink writes
//! * `validation` - Configuration validation errors

use tracing::Span;

pub mod analysis;
pub mod model;
pub mod persistence;
pub mod resource;
pub mod validation;

/// Emit a message as a structured `tracing` event or span.
pub trait StructuredLog {
    fn log(&self);

    fn span(&self, name: &str) -> Span;
}
