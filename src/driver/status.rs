// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use chrono::{DateTime, Local};
use std::fmt;

use crate::resource::ResourceKind;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Critical,
}

impl fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLevel::Info => f.write_str("INFO"),
            StatusLevel::Critical => f.write_str("CRITICAL"),
        }
    }
}

/// `{timestamp}|{file|resource}|{identifier}|{INFO|CRITICAL}`
#[derive(Debug, Clone, PartialEq)]
pub struct StatusLine {
    pub timestamp: DateTime<Local>,
    pub kind: ResourceKind,
    pub identifier: String,
    pub level: StatusLevel,
}

impl StatusLine {
    pub fn new(
        timestamp: DateTime<Local>,
        kind: ResourceKind,
        identifier: impl Into<String>,
        level: StatusLevel,
    ) -> Self {
        Self {
            timestamp,
            kind,
            identifier: identifier.into(),
            level,
        }
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.kind,
            self.identifier,
            self.level
        )
    }
}
