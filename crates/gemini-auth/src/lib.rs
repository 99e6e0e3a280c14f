//! Credentials, nonce generation and payload signing for the Gemini API
//!
//! Gemini's private endpoints authenticate every request through three
//! headers: the API key, a base64-encoded JSON payload, and an
//! HMAC-SHA384 signature computed over that base64 text. This crate
//! owns that pipeline; the HTTP side lives in `gemini-rest`.
//!
//! # Example
//!
//! ```
//! use gemini_auth::Credentials;
//! use serde_json::json;
//!
//! let creds = Credentials::new("my-api-key", "my-api-secret");
//! let envelope = creds.sign(&json!({
//!     "request": "/v1/balances",
//!     "nonce": "1616492376594",
//! }));
//!
//! // `envelope.payload` goes in X-GEMINI-PAYLOAD,
//! // `envelope.signature` in X-GEMINI-SIGNATURE.
//! assert_eq!(envelope.signature.len(), 96);
//! ```

mod credentials;
mod error;
mod nonce;

pub use credentials::{Credentials, SignedEnvelope};
pub use error::{AuthError, AuthResult};
pub use nonce::{ClockNonce, NonceProvider};
