//! Typed search envelope returned by the registry

use serde::Deserialize;

/// One entry of a registry search result set.
///
/// Every field is required: a result missing any of them fails the decode
/// instead of being silently defaulted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HubSearchResult {
    /// Image name, unique within a result set but not globally
    pub name: String,
    pub is_automated: bool,
    pub is_trusted: bool,
    pub is_official: bool,
    pub star_count: u64,
    /// Description shown as documentation, possibly empty
    pub description: String,
}

/// Envelope returned by `/v1/search`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HubSearchResponse {
    pub num_pages: u32,
    pub num_results: u32,
    /// Result list, in the registry's ranking order
    pub results: Vec<HubSearchResult>,
    pub page_size: u32,
    pub query: String,
    pub page: u32,
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod models_tests;
