//! Client for the registry search endpoint

use futures::FutureExt;
use log::debug;

use super::models::HubSearchResponse;
use crate::fetch::{FetchCache, FetchError, FetchFuture, HttpTransport, RequestDescriptor};

/// Host of the registry search endpoint.
pub const REGISTRY_HOST: &str = "registry.hub.docker.com";

/// Fixed number of results requested per search.
pub const SEARCH_RESULT_LIMIT: u32 = 100;

/// Client for the registry's `/v1/search` endpoint.
///
/// Owns its fetch cache, so the cache's lifetime is bounded by the client's
/// and two clients never share entries. Decoding happens inside the cached
/// fetch: a malformed body poisons the entry the same way a transport
/// failure does.
pub struct RegistryClient {
    cache: FetchCache<HubSearchResponse>,
}

impl RegistryClient {
    /// Client backed by the live HTTPS transport.
    pub fn new() -> Self {
        let transport = HttpTransport::new();
        Self::with_loader(move |request| {
            let transport = transport.clone();
            async move {
                let body = transport.fetch_body(&request).await?;
                decode_envelope(&body)
            }
            .boxed_local()
        })
    }

    /// Client over a custom loader, letting tests swap the network out for
    /// canned bodies or call counters.
    pub fn with_loader(
        loader: impl Fn(RequestDescriptor) -> FetchFuture<HubSearchResponse> + 'static,
    ) -> Self {
        Self {
            cache: FetchCache::new(loader),
        }
    }

    /// Search the registry for images matching `image_name`.
    ///
    /// Identical searches issued while the first is still in flight share
    /// its single network call; `use_cache = false` forces a fresh one.
    pub async fn search(
        &self,
        image_name: &str,
        use_cache: bool,
    ) -> Result<HubSearchResponse, FetchError> {
        let request = RequestDescriptor::get(
            REGISTRY_HOST,
            format!(
                "/v1/search?q={}&n={}",
                urlencoding::encode(image_name),
                SEARCH_RESULT_LIMIT
            ),
        );
        debug!("searching registry: {}", request.path());
        self.cache.fetch(&request, use_cache).await
    }
}

impl Default for RegistryClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a search response body, rejecting anything schema-mismatched.
fn decode_envelope(body: &str) -> Result<HubSearchResponse, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
