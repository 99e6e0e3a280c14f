//! Error types for authentication operations

/// Errors that can occur while loading credentials
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuthError::EnvVarNotSet("GEMINI_API_KEY".to_string());
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }
}
