//! Parameter and response types for the host entry points.

use serde::{Deserialize, Serialize};

/// Parameters for generating an embedding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateEmbeddingParams {
    /// Text to embed.
    pub text: String,

    /// Provider model; the configured default is used when absent.
    #[serde(default)]
    pub model: Option<String>,
}

/// Result of generating an embedding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateEmbeddingResponse {
    /// The record in its transport encoding, ready for the host to store.
    pub record: String,
}

/// Parameters for rendering a stored record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatRecordParams {
    /// Stored transport string, if the host has one.
    #[serde(default)]
    pub record: Option<String>,
}

/// Parameters for scoring two vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityParams {
    pub a: Vec<f64>,
    pub b: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResponse {
    /// Cosine similarity in [-1, 1], or 0 when either vector is all zeros.
    pub similarity: f64,
}
