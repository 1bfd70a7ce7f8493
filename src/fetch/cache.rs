//! In-flight fetch memoization
//!
//! The concurrency-correctness core of the crate. A fetch for a key is
//! stored in the map as a shared future the moment it is created - before
//! the creating call first yields - so a second request for the same key
//! arriving while the first is still pending observes the existing entry
//! instead of racing to create a duplicate.

use std::collections::HashMap;

use futures::FutureExt;
use futures::future::{LocalBoxFuture, Shared};
use tokio::sync::RwLock;

use super::FetchError;
use super::request::RequestDescriptor;

/// Future produced by a cache loader.
///
/// Boxed without a `Send` bound: the whole pipeline runs on a
/// single-threaded runtime, and `Shared` only needs the output to be
/// `Clone`.
pub type FetchFuture<T> = LocalBoxFuture<'static, Result<T, FetchError>>;

type SharedFetch<T> = Shared<FetchFuture<T>>;

/// Request-deduplicating fetch cache.
///
/// Maps a request's cache key to the single shared future performing the
/// underlying fetch. Each caller awaits its own clone of that future, so a
/// caller that times out, drops its handle, or mishandles the error cannot
/// abort the fetch or perturb what other callers observe; the map retains a
/// handle of its own, keeping the fetch alive until it completes.
///
/// Entries are never evicted, successes and failures alike: a lookup that
/// failed once keeps returning that failure for the life of the cache.
pub struct FetchCache<T>
where
    T: Clone + 'static,
{
    entries: RwLock<HashMap<String, SharedFetch<T>>>,
    loader: Box<dyn Fn(RequestDescriptor) -> FetchFuture<T>>,
}

impl<T> FetchCache<T>
where
    T: Clone + 'static,
{
    /// Create a cache that materializes entries with `loader`.
    pub fn new(loader: impl Fn(RequestDescriptor) -> FetchFuture<T> + 'static) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            loader: Box::new(loader),
        }
    }

    /// Fetch the resource identified by `request`.
    ///
    /// With `use_cache` set, an in-flight or completed fetch for the same
    /// key is reused; at most one loader call is ever issued per key for the
    /// life of the cache. With `use_cache` unset, memoization is bypassed
    /// entirely and a fresh fetch's outcome is returned directly - the
    /// escape hatch for callers that must not share state.
    pub async fn fetch(
        &self,
        request: &RequestDescriptor,
        use_cache: bool,
    ) -> Result<T, FetchError> {
        if !use_cache {
            return (self.loader)(request.clone()).await;
        }

        let key = request.cache_key();
        let cached = self.entries.read().await.get(&key).cloned();
        let shared = match cached {
            Some(shared) => shared,
            None => {
                let mut entries = self.entries.write().await;
                // The entry goes into the map before anything is awaited;
                // entry() also covers a racing insert between the read and
                // write locks.
                entries
                    .entry(key)
                    .or_insert_with(|| (self.loader)(request.clone()).shared())
                    .clone()
            }
        };

        shared.await
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod cache_tests;
