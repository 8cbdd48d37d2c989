// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod analysis;      // text → report pipeline
pub mod config;        // config loading + validation
pub mod driver;        // resolve → load → analyze state machine
pub mod errors;        // error handling
pub mod observability;
pub mod persistence;   // report sinks
pub mod resource;      // identifier classification + loaders
pub mod traits;        // seams for loaders and sinks

pub use analysis::{Analyzer, Report, SentenceModel};
pub use driver::{AnalysisOutcome, ReportDriver, StatusLine};
