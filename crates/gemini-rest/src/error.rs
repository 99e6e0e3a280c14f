//! Error types for REST API operations
//!
//! Only two things fail on the client side: transport-level errors
//! (surfaced unmodified from `reqwest`) and structurally invalid call
//! arguments, rejected before any network activity. Rejections from the
//! exchange itself arrive as well-formed JSON and are returned as data,
//! not mapped into this enum.

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// HTTP request failed (connection, non-JSON body, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Caller-supplied arguments are structurally invalid
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
