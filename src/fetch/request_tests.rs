//! Tests for request descriptors and cache keys

use proptest::prelude::*;

use super::*;

#[test]
fn cache_key_joins_method_host_and_path() {
    let request = RequestDescriptor::get("registry.hub.docker.com", "/v1/search?q=redis&n=100");
    assert_eq!(
        request.cache_key(),
        "GET registry.hub.docker.com /v1/search?q=redis&n=100"
    );
}

#[test]
fn url_targets_https() {
    let request = RequestDescriptor::get("registry.hub.docker.com", "/v1/search?q=redis&n=100");
    assert_eq!(
        request.url(),
        "https://registry.hub.docker.com/v1/search?q=redis&n=100"
    );
}

#[test]
fn equality_is_byte_for_byte() {
    // No query normalization: reordered parameters name a different resource.
    let a = RequestDescriptor::get("registry.hub.docker.com", "/v1/search?q=redis&n=100");
    let b = RequestDescriptor::get("registry.hub.docker.com", "/v1/search?n=100&q=redis");
    assert_ne!(a, b);
    assert_ne!(a.cache_key(), b.cache_key());
}

proptest! {
    // Hostnames and percent-encoded paths never contain a literal space, so
    // the space-joined key collides only for identical descriptors - even
    // when two descriptors' plain concatenations match.
    #[test]
    fn distinct_descriptors_get_distinct_keys(
        host_a in "[a-z0-9.-]{1,24}",
        path_a in "/[a-zA-Z0-9./?=&%-]{0,32}",
        host_b in "[a-z0-9.-]{1,24}",
        path_b in "/[a-zA-Z0-9./?=&%-]{0,32}",
    ) {
        let a = RequestDescriptor::get(host_a.clone(), path_a.clone());
        let b = RequestDescriptor::get(host_b.clone(), path_b.clone());
        prop_assert_eq!(
            a.cache_key() == b.cache_key(),
            host_a == host_b && path_a == path_b
        );
    }
}
