//! Request descriptors and cache keys

/// Identifies a remote resource to fetch.
///
/// Two descriptors name the same resource, for caching purposes, iff method,
/// host and path are byte-for-byte identical. Query parameters are never
/// reordered or otherwise normalized: reordered parameters are a different
/// resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestDescriptor {
    method: &'static str,
    host: String,
    path: String,
}

impl RequestDescriptor {
    /// Descriptor for a GET request - the only verb this tool issues.
    ///
    /// `path` must already carry its query string percent-encoded.
    pub fn get(host: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: "GET",
            host: host.into(),
            path: path.into(),
        }
    }

    pub fn method(&self) -> &str {
        self.method
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Deterministic cache key: method, host and path joined with spaces.
    ///
    /// Methods and hostnames cannot contain a space, and paths arrive
    /// percent-encoded, so differently split inputs with equal
    /// concatenations still get distinct keys.
    pub fn cache_key(&self) -> String {
        format!("{} {} {}", self.method, self.host, self.path)
    }

    /// Full request URL (HTTPS, port 443).
    pub fn url(&self) -> String {
        format!("https://{}{}", self.host, self.path)
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod request_tests;
