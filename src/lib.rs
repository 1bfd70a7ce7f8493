//! hubhint library - Docker image name completion
//!
//! Queries the Docker Hub search endpoint and turns the results into ranked,
//! annotated completion candidates. Exposed as a library so editor
//! integrations and tests can drive the engine directly.

pub mod fetch;
pub mod registry;
pub mod suggest;

// Re-export commonly used types for convenience
pub use fetch::{FetchCache, FetchError, RequestDescriptor};
pub use suggest::{CompletionCandidate, SuggestionEngine};
