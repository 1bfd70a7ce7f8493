//! Suggestion engine

use log::debug;

use super::candidate::CompletionCandidate;
use crate::fetch::FetchError;
use crate::registry::{RegistryClient, popular_images};

/// Turns partial image names into completion candidates.
pub struct SuggestionEngine {
    registry: RegistryClient,
}

impl SuggestionEngine {
    /// Engine backed by the live registry endpoint.
    pub fn new() -> Self {
        Self::with_registry(RegistryClient::new())
    }

    /// Engine over a custom registry client.
    pub fn with_registry(registry: RegistryClient) -> Self {
        Self { registry }
    }

    /// Suggest images matching `partial_name`, preserving registry order.
    ///
    /// An empty string means the user has only typed the trigger character:
    /// the hand-curated popular list is returned without touching the
    /// network or the cache. Any transport or decode failure propagates;
    /// callers at the editor boundary degrade to showing no suggestions.
    pub async fn suggest(
        &self,
        partial_name: &str,
    ) -> Result<Vec<CompletionCandidate>, FetchError> {
        if partial_name.is_empty() {
            return Ok(popular_images()
                .iter()
                .map(CompletionCandidate::from_result)
                .collect());
        }

        let response = self.registry.search(partial_name, true).await?;
        debug!(
            "registry returned {} results for {partial_name:?}",
            response.results.len()
        );

        Ok(response
            .results
            .iter()
            .map(CompletionCandidate::from_result)
            .collect())
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
