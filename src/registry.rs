//! Docker Hub search client
//!
//! Typed decoding of the `/v1/search` envelope, the hand-curated popular
//! image list, and the client that routes searches through the fetch cache.

mod client;
mod models;
mod popular;

pub use client::{REGISTRY_HOST, RegistryClient, SEARCH_RESULT_LIMIT};
pub use models::{HubSearchResponse, HubSearchResult};
pub use popular::popular_images;
