// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for resource acquisition.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Resource fetched and decoded.
///
/// # Log Level
/// `debug!` - Routine
///
/// # Example
/// ```
/// use textstat::observability::messages::resource::ResourceLoaded;
///
/// let msg = ResourceLoaded {
///     identifier: "https://example.com/sample.txt",
///     kind: "resource",
///     bytes: 2048,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct ResourceLoaded<'a> {
    pub identifier: &'a str,
    pub kind: &'a str,
    pub bytes: usize,
}

impl Display for ResourceLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded {} '{}': {} bytes",
            self.kind, self.identifier, self.bytes
        )
    }
}

impl StructuredLog for ResourceLoaded<'_> {
    fn log(&self) {
        tracing::debug!(
            identifier = self.identifier,
            kind = self.kind,
            bytes = self.bytes,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "resource_loaded",
            span_name = name,
            identifier = self.identifier,
            kind = self.kind,
        )
    }
}

/// Remote fetch in progress.
///
/// # Log Level
/// `debug!` - Routine
pub struct FetchingResource<'a> {
    pub url: &'a str,
    pub user_agent: &'a str,
}

impl Display for FetchingResource<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Fetching {} as '{}'", self.url, self.user_agent)
    }
}

impl StructuredLog for FetchingResource<'_> {
    fn log(&self) {
        tracing::debug!(url = self.url, user_agent = self.user_agent, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("fetch", span_name = name, url = self.url)
    }
}
