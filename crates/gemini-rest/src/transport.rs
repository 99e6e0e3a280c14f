//! Transport abstraction for dispatching signed requests
//!
//! The client builds a complete request descriptor (URL plus auth
//! headers, always an empty body) and hands it to a [`Transport`].
//! The default transport wraps `reqwest`; tests substitute a capturing
//! mock so the full pipeline can run without a network.

use crate::error::RestResult;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// A fully authenticated HTTP request, ready for dispatch
///
/// All request data rides in the headers; the body is always empty
/// (`Content-Length: 0`). This is a quirk of Gemini's API family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    /// Absolute URL (base URL + endpoint path)
    pub url: String,
    /// Header name/value pairs, including the auth headers
    pub headers: Vec<(&'static str, String)>,
}

impl SignedRequest {
    /// Look up a header value by name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Dispatches a signed request and parses the response body as JSON
///
/// Implementations propagate transport-level failures untranslated and
/// perform no retries and no status-code interpretation; the exchange's
/// error envelope is returned as ordinary data.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST the request with an empty body and parse the response as JSON
    async fn send(&self, request: &SignedRequest) -> RestResult<serde_json::Value>;
}

/// Default transport backed by `reqwest`
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with the given timeout and user agent
    pub fn new(timeout_secs: u64, user_agent: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &SignedRequest) -> RestResult<serde_json::Value> {
        let mut builder = self.client.post(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let response = builder.send().await?.json().await?;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lookup() {
        let request = SignedRequest {
            url: "https://api.gemini.com/v1/balances".to_string(),
            headers: vec![
                ("Content-Type", "text/plain".to_string()),
                ("X-GEMINI-APIKEY", "key".to_string()),
            ],
        };

        assert_eq!(request.header("X-GEMINI-APIKEY"), Some("key"));
        assert_eq!(request.header("X-GEMINI-PAYLOAD"), None);
    }
}
