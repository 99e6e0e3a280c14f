//! Shared fixtures for integration tests
//!
//! Provides a capturing transport and a deterministic nonce provider so
//! the full request pipeline runs without a network.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use gemini_rest::{
    ClientConfig, Credentials, GeminiClient, NonceProvider, RestResult, SignedRequest, Transport,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

pub const API_KEY: &str = "account-key";
pub const API_SECRET: &str = "1234abcd";

/// Transport that records every request and replays a canned response
pub struct MockTransport {
    requests: Mutex<Vec<SignedRequest>>,
    response: Value,
}

impl MockTransport {
    pub fn new(response: Value) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            response,
        })
    }

    pub fn ok() -> Arc<Self> {
        Self::new(json!({ "result": "ok" }))
    }

    /// All requests seen so far
    pub fn requests(&self) -> Vec<SignedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The single request this transport saw
    pub fn only_request(&self) -> SignedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &SignedRequest) -> RestResult<Value> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.response.clone())
    }
}

/// Nonce provider counting up from a fixed base
pub struct SequenceNonce {
    base: u64,
    counter: AtomicU64,
}

impl SequenceNonce {
    pub fn starting_at(base: u64) -> Arc<Self> {
        Arc::new(Self {
            base,
            counter: AtomicU64::new(0),
        })
    }
}

impl NonceProvider for SequenceNonce {
    fn next_nonce(&self) -> String {
        (self.base + self.counter.fetch_add(1, Ordering::SeqCst)).to_string()
    }
}

/// Sandbox client wired to the given transport
pub fn sandbox_client(transport: Arc<MockTransport>) -> GeminiClient {
    GeminiClient::with_transport(
        ClientConfig::new(Credentials::new(API_KEY, API_SECRET)).with_sandbox(),
        transport,
        SequenceNonce::starting_at(1616492376594),
    )
}

/// Sandbox client with a configured sub-account
pub fn sandbox_client_with_account(transport: Arc<MockTransport>) -> GeminiClient {
    GeminiClient::with_transport(
        ClientConfig::new(Credentials::new(API_KEY, API_SECRET))
            .with_sandbox()
            .with_account("primary"),
        transport,
        SequenceNonce::starting_at(1616492376594),
    )
}

/// Decode the X-GEMINI-PAYLOAD header back into JSON
pub fn decode_payload(request: &SignedRequest) -> Value {
    let b64 = request
        .header("X-GEMINI-PAYLOAD")
        .expect("payload header missing");
    let raw = BASE64.decode(b64).expect("payload is not valid base64");
    serde_json::from_slice(&raw).expect("payload is not valid JSON")
}
