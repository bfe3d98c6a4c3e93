/// Errors surfaced by catalog operations.
///
/// Every failure a catalog can produce is one of these four kinds; the
/// storage adapter classifies provider errors into the taxonomy at the
/// boundary and nothing is re-thrown unclassified. There are no retries:
/// each error reaches the caller exactly as classified.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GatewayError {
    /// Credentials absent or still set to their placeholders. Raised before
    /// any network I/O is attempted.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// The store rejected our access (permission or signature failure).
    #[error("access denied: {message}")]
    Auth { message: String },

    /// Bucket, key, or catalog id does not exist.
    #[error("not found: {message}")]
    NotFound { message: String },

    /// Connectivity, CORS, or any otherwise-unclassified store failure.
    /// Carries the underlying provider message verbatim.
    #[error("transport error: {message}")]
    Transport { message: String },
}

impl GatewayError {
    pub fn config(message: impl Into<String>) -> Self {
        GatewayError::Config {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        GatewayError::NotFound {
            message: message.into(),
        }
    }
}

/// Result type for catalog operations
pub type GatewayResult<T> = Result<T, GatewayError>;
