// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::path::PathBuf;

use crate::config::FetchConfig;
use crate::errors::ResourceError;
use crate::observability::messages::{
    resource::{FetchingResource, ResourceLoaded},
    StructuredLog,
};
use crate::resource::{LoadedResource, ResourceKind};
use crate::traits::ResourceLoader;

/// Reads local files and fetches URLs.
#[derive(Debug, Clone)]
pub struct DefaultResourceLoader {
    client: reqwest::Client,
    user_agent: String,
}

impl DefaultResourceLoader {
    pub fn new(fetch: &FetchConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(fetch.user_agent.clone())
            .timeout(fetch.timeout())
            .build()?;

        Ok(Self {
            client,
            user_agent: fetch.user_agent.clone(),
        })
    }

    async fn read_file(&self, identifier: &str) -> Result<Vec<u8>, ResourceError> {
        let path = PathBuf::from(identifier);
        tokio::fs::read(&path)
            .await
            .map_err(|source| ResourceError::Io { path, source })
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ResourceError> {
        FetchingResource {
            url,
            user_agent: &self.user_agent,
        }
        .log();

        let http_error = |source| ResourceError::Http {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(http_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ResourceError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(http_error)?;
        Ok(body.to_vec())
    }
}

#[async_trait]
impl ResourceLoader for DefaultResourceLoader {
    async fn load(&self, identifier: &str) -> Result<LoadedResource, ResourceError> {
        if identifier.trim().is_empty() {
            return Err(ResourceError::InvalidIdentifier(identifier.to_string()));
        }

        let kind = ResourceKind::classify(identifier);
        let bytes = match kind {
            ResourceKind::File => self.read_file(identifier).await?,
            ResourceKind::Resource => self.fetch(identifier.trim()).await?,
        };

        let size = bytes.len();
        let text = String::from_utf8(bytes).map_err(|source| ResourceError::Decode {
            identifier: identifier.to_string(),
            source,
        })?;

        ResourceLoaded {
            identifier,
            kind: kind.as_str(),
            bytes: size,
        }
        .log();

        Ok(LoadedResource::new(kind, identifier, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn loader() -> DefaultResourceLoader {
        DefaultResourceLoader::new(&FetchConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_load_local_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all("Hello there. General Kenobi!".as_bytes()).unwrap();
        let identifier = file.path().to_str().unwrap();

        let loaded = loader().load(identifier).await.unwrap();
        assert_eq!(loaded.kind, ResourceKind::File);
        assert_eq!(loaded.identifier, identifier);
        assert_eq!(loaded.text, "Hello there. General Kenobi!");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let result = loader().load("/definitely/not/a/real/file.txt").await;
        assert!(matches!(result, Err(ResourceError::Io { .. })));
    }

    #[tokio::test]
    async fn test_non_utf8_file_is_decode_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x66, 0x6f, 0xff, 0xfe]).unwrap();

        let result = loader().load(file.path().to_str().unwrap()).await;
        assert!(matches!(result, Err(ResourceError::Decode { .. })));
    }

    #[tokio::test]
    async fn test_blank_identifier_is_rejected() {
        let result = loader().load("   ").await;
        assert!(matches!(result, Err(ResourceError::InvalidIdentifier(_))));
    }
}
