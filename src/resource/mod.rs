// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Resource identifiers and how their text is acquired.
//!
//! # Available Loaders
//!
//! ## DefaultResourceLoader
//! - **Files**: read with `tokio::fs`
//! - **URLs**: fetched with `reqwest` using the configured user agent and timeout
//!
//! ## Stub loaders (test-only)
//! - **StubResourceLoader**: serves canned texts from memory
//! - **FailingResourceLoader**: always fails, for driver error paths

mod kind;
mod loader;
#[cfg(test)]
pub mod stub;

pub use kind::ResourceKind;
pub use loader::DefaultResourceLoader;

/// Text acquired for one identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedResource {
    pub kind: ResourceKind,
    pub identifier: String,
    pub text: String,
}

impl LoadedResource {
    pub fn new(kind: ResourceKind, identifier: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind,
            identifier: identifier.into(),
            text: text.into(),
        }
    }
}
