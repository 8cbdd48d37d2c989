use async_trait::async_trait;

use crate::errors::ResourceError;
use crate::resource::LoadedResource;

/// Acquires the text behind a resource identifier.
///
/// Implementations own the whole I/O boundary: classification is already
/// done by the caller, but fetching, timeouts and UTF-8 decoding happen here.
#[async_trait]
pub trait ResourceLoader: Send + Sync {
    async fn load(&self, identifier: &str) -> Result<LoadedResource, ResourceError>;
}
