// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::collections::HashMap;

use crate::errors::ResourceError;
use crate::resource::{LoadedResource, ResourceKind};
use crate::traits::ResourceLoader;

/// Serves canned texts keyed by identifier; unknown identifiers are a missing file.
pub struct StubResourceLoader {
    pub texts: HashMap<String, String>,
    /// Kind reported for every loaded text instead of classifying the identifier.
    pub kind: Option<ResourceKind>,
}

impl StubResourceLoader {
    pub fn new<I, K, V>(texts: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            texts: texts
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            kind: None,
        }
    }

    pub fn reporting_kind(mut self, kind: ResourceKind) -> Self {
        self.kind = Some(kind);
        self
    }
}

#[async_trait]
impl ResourceLoader for StubResourceLoader {
    async fn load(&self, identifier: &str) -> Result<LoadedResource, ResourceError> {
        match self.texts.get(identifier) {
            Some(text) => Ok(LoadedResource::new(
                self.kind.unwrap_or_else(|| ResourceKind::classify(identifier)),
                identifier,
                text.clone(),
            )),
            None => Err(ResourceError::Io {
                path: identifier.into(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "stub has no such text"),
            }),
        }
    }
}

/// A loader that always fails with an HTTP status, for testing failure scenarios
pub struct FailingResourceLoader {
    pub status: u16,
}

#[async_trait]
impl ResourceLoader for FailingResourceLoader {
    async fn load(&self, identifier: &str) -> Result<LoadedResource, ResourceError> {
        Err(ResourceError::Status {
            url: identifier.to_string(),
            status: self.status,
        })
    }
}

/// A loader that panics, for checking that a crash still ends in CRITICAL
pub struct PanickingResourceLoader;

#[async_trait]
impl ResourceLoader for PanickingResourceLoader {
    async fn load(&self, identifier: &str) -> Result<LoadedResource, ResourceError> {
        panic!("loader crashed on {}", identifier)
    }
}
