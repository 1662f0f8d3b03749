//! Error types for the embeddings system.

use thiserror::Error;

/// Result type alias for embedding operations.
pub type Result<T> = std::result::Result<T, EmbeddingError>;

/// Errors that can occur in the embeddings system.
///
/// Malformed record text is not represented here: record recovery always
/// degrades to a sentinel record instead of failing.
#[derive(Error, Debug)]
pub enum EmbeddingError {
    /// Caller supplied arguments the operation cannot accept.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The provider rejected the request or returned no embedding.
    #[error("provider error: {0}")]
    Provider(String),

    /// Invalid response from provider.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

impl EmbeddingError {
    /// The provider's message, if this is a provider failure.
    pub fn provider_message(&self) -> Option<&str> {
        match self {
            Self::Provider(message) => Some(message),
            _ => None,
        }
    }
}
