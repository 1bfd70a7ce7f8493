//! Request-deduplicating fetch layer
//!
//! Identical requests issued while a fetch is still in flight share that one
//! network call and its eventual outcome; each caller awaits an independent
//! handle, so abandoning one never disturbs the others.

mod cache;
mod http;
mod request;

pub use cache::{FetchCache, FetchFuture};
pub use http::HttpTransport;
pub use request::RequestDescriptor;

use thiserror::Error;

/// Errors surfaced by the fetch layer
///
/// Variants carry rendered messages rather than source errors so a completed
/// outcome can be handed to every caller sharing the fetch.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum FetchError {
    /// The connection failed or was aborted mid-stream
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not a valid search envelope
    #[error("malformed registry response: {0}")]
    Decode(String),
}
