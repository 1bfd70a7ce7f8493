//! HTTPS transport for registry requests

use bytes::BytesMut;
use futures::StreamExt;
use reqwest::Client;
use reqwest::header;

use super::FetchError;
use super::request::RequestDescriptor;

/// Product-identifying User-Agent carrying the tool's own version.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper around a shared reqwest client.
///
/// Sends JSON-accepting GET requests and accumulates the response body as it
/// streams in. No timeout is set at this layer: a hung connection hangs the
/// corresponding cache entry and every caller awaiting it.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Issue the request and return the full accumulated body.
    ///
    /// Resolves once the stream ends, whatever the status code: the registry
    /// reports errors through bodies the decode step rejects. Fails only
    /// when the connection itself reports an error.
    pub async fn fetch_body(&self, request: &RequestDescriptor) -> Result<String, FetchError> {
        let response = self
            .client
            .get(request.url())
            .header(header::ACCEPT, "application/json")
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let mut stream = response.bytes_stream();
        let mut body = BytesMut::new();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| FetchError::Network(e.to_string()))?;
            body.extend_from_slice(&chunk);
        }

        String::from_utf8(body.to_vec()).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}
