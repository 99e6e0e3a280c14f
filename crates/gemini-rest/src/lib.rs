//! REST API client for Gemini's private trading endpoints
//!
//! This crate provides an authenticated client for trading on Gemini:
//! order placement, cancellation, status queries, trade history and
//! balance queries.
//!
//! # Authentication
//!
//! Gemini's private endpoints carry all request data in headers: a
//! base64-encoded JSON payload, an HMAC-SHA384 signature over that
//! base64 text, and the API key. The HTTP body is always empty. Signing
//! lives in the `gemini-auth` crate.
//!
//! # Responses
//!
//! Responses are returned as parsed JSON (`serde_json::Value`),
//! unmodified. Gemini's own error envelope (`"result": "error"`) is
//! ordinary data for the caller to inspect, not a client-side error;
//! only transport failures and invalid call arguments produce `Err`.
//!
//! # Example
//!
//! ```no_run
//! use gemini_rest::{Credentials, GeminiClient};
//! use gemini_rest::types::{OrderRequest, OrderSide};
//! use rust_decimal_macros::dec;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::from_env()?;
//!     let client = GeminiClient::sandbox(creds);
//!
//!     let balances = client.get_balances().await?;
//!     println!("Balances: {}", balances);
//!
//!     let order = OrderRequest::limit("btcusd", OrderSide::Buy, dec!(0.01), dec!(50000));
//!     let placed = client.place_order(&order).await?;
//!     println!("Placed: {}", placed);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod endpoints;
pub mod error;
pub mod transport;
pub mod types;

// Re-export main types
pub use client::{ClientConfig, Environment, GeminiClient};
pub use error::{RestError, RestResult};
pub use gemini_auth::{ClockNonce, Credentials, NonceProvider, SignedEnvelope};
pub use transport::{HttpTransport, SignedRequest, Transport};
pub use types::{CancelScope, OrderOption, OrderRequest, OrderSide, OrderType};
