//! Authentication credentials for the Gemini API
//!
//! Implements the payload-signing scheme required by Gemini's private
//! endpoints: the JSON payload is base64-encoded and an HMAC-SHA384
//! digest is computed over the base64 text, rendered as lowercase hex.
//!
//! # Security
//!
//! API secrets are stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretBox};
use sha2::Sha384;

use crate::error::{AuthError, AuthResult};

type HmacSha384 = Hmac<Sha384>;

/// API credentials for authenticated requests
///
/// The secret is automatically zeroized when the Credentials are dropped,
/// preventing sensitive data from remaining in memory.
pub struct Credentials {
    /// API key (public)
    api_key: String,
    /// API secret (raw bytes, zeroized on drop)
    api_secret: SecretBox<Vec<u8>>,
}

impl Credentials {
    /// Create new credentials from an API key and secret
    ///
    /// Gemini secrets are opaque ASCII strings; the secret is used
    /// byte-for-byte as the HMAC key.
    pub fn new(api_key: impl Into<String>, api_secret: impl AsRef<str>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretBox::new(Box::new(api_secret.as_ref().as_bytes().to_vec())),
        }
    }

    /// Create credentials from environment variables
    ///
    /// Reads `GEMINI_API_KEY` and `GEMINI_API_SECRET` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| AuthError::EnvVarNotSet("GEMINI_API_KEY".to_string()))?;
        let api_secret = std::env::var("GEMINI_API_SECRET")
            .map_err(|_| AuthError::EnvVarNotSet("GEMINI_API_SECRET".to_string()))?;

        Ok(Self::new(api_key, api_secret))
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sign a request payload for Gemini's API
    ///
    /// Gemini signature algorithm:
    /// 1. Serialize the payload to JSON
    /// 2. Base64-encode the JSON bytes
    /// 3. HMAC-SHA384(secret, base64_text)
    /// 4. Render the digest as lowercase hex
    ///
    /// The payload must already carry its `request` and `nonce` fields;
    /// this step is a pure function of payload and secret.
    pub fn sign(&self, payload: &serde_json::Value) -> SignedEnvelope {
        // Object serialization is infallible for well-formed values
        let encoded = serde_json::to_vec(payload).expect("JSON payload serialization");
        let b64 = BASE64.encode(&encoded);

        let mut mac = HmacSha384::new_from_slice(self.api_secret.expose_secret())
            .expect("HMAC can take key of any size");
        mac.update(b64.as_bytes());
        let signature = hex::encode(mac.finalize().into_bytes());

        SignedEnvelope {
            payload: b64,
            signature,
        }
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates new SecretBox with same content)
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: SecretBox::new(Box::new(self.api_secret.expose_secret().clone())),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "api_key",
                &format!("{}...", &self.api_key[..8.min(self.api_key.len())]),
            )
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// The pair of header values that authenticates one request
///
/// Derived per call and discarded after the response is obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedEnvelope {
    /// Base64-encoded JSON payload (X-GEMINI-PAYLOAD)
    pub payload: String,
    /// Lowercase hex HMAC-SHA384 over the base64 text (X-GEMINI-SIGNATURE)
    pub signature: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_known_answer_signature() {
        // Known-answer vector: HMAC-SHA384("1234abcd", base64(payload))
        let creds = Credentials::new("account-key", "1234abcd");
        let envelope = creds.sign(&json!({
            "request": "/v1/balances",
            "nonce": "1616492376594",
        }));

        assert_eq!(
            envelope.payload,
            "eyJub25jZSI6IjE2MTY0OTIzNzY1OTQiLCJyZXF1ZXN0IjoiL3YxL2JhbGFuY2VzIn0="
        );
        assert_eq!(
            envelope.signature,
            "72f95b2e539dfbb96c64356c3d95d894a12cc82b89d8d71612f3ec21c78375c6116c37e43942fd3dda93628e5ba6e30c"
        );
    }

    #[test]
    fn test_known_answer_with_account() {
        let creds = Credentials::new("account-key", "1234abcd");
        let envelope = creds.sign(&json!({
            "request": "/v1/balances",
            "nonce": "1616492376594",
            "account": "primary",
        }));

        assert_eq!(
            envelope.signature,
            "85a995a30fe0b7577300a473c0d9215951e3db27d8c61b02faeee79a3bca12a5b4ca8470d585516b6f28fe20091ebf7e"
        );
    }

    #[test]
    fn test_signing_is_deterministic() {
        let creds = Credentials::new("key", "secret");
        let payload = json!({ "request": "/v1/orders", "nonce": "1" });

        assert_eq!(creds.sign(&payload), creds.sign(&payload));
    }

    #[test]
    fn test_signature_is_lowercase_hex_sha384() {
        let creds = Credentials::new("key", "secret");
        let envelope = creds.sign(&json!({ "request": "/v1/orders", "nonce": "1" }));

        // SHA-384 digest is 48 bytes = 96 hex chars
        assert_eq!(envelope.signature.len(), 96);
        assert!(envelope
            .signature
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_payload_byte_change_changes_signature() {
        let creds = Credentials::new("key", "secret");
        let a = creds.sign(&json!({ "request": "/v1/orders", "nonce": "1" }));
        let b = creds.sign(&json!({ "request": "/v1/orders", "nonce": "2" }));

        assert_ne!(a.signature, b.signature);
    }

    #[test]
    fn test_payload_base64_roundtrip() {
        let creds = Credentials::new("key", "secret");
        let payload = json!({ "request": "/v1/mytrades", "nonce": "42", "symbol": "btcusd" });
        let envelope = creds.sign(&payload);

        let decoded = BASE64.decode(&envelope.payload).unwrap();
        let reparsed: serde_json::Value = serde_json::from_slice(&decoded).unwrap();
        assert_eq!(reparsed, payload);
        assert_eq!(decoded, serde_json::to_vec(&payload).unwrap());
    }

    #[test]
    fn test_different_secrets_disagree() {
        let payload = json!({ "request": "/v1/balances", "nonce": "7" });
        let a = Credentials::new("key", "secret-a").sign(&payload);
        let b = Credentials::new("key", "secret-b").sign(&payload);

        assert_eq!(a.payload, b.payload);
        assert_ne!(a.signature, b.signature);
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let creds = Credentials::new("test_api_key", "test_api_secret");
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("test_api_secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
