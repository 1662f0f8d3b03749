//! Embedding entry points exposed to the host.
//!
//! Each entry point is independent: generation returns the stored form of a
//! new record, formatting recovers a stored record for display, and
//! similarity scores two vectors. None of them call each other.

use embedcell_embeddings::{
    EmbeddingClient, EmbeddingRecord, Result, cosine_similarity, format_record,
};
use tracing::{error, info};

use crate::protocol::{
    FormatRecordParams, GenerateEmbeddingParams, GenerateEmbeddingResponse, SimilarityParams,
    SimilarityResponse,
};

/// Handler for embedding operations.
#[derive(Clone)]
pub struct EmbeddingHandler {
    client: EmbeddingClient,
}

impl EmbeddingHandler {
    pub fn new(client: EmbeddingClient) -> Self {
        Self { client }
    }

    /// Generate an embedding and return the record as a transport string.
    pub async fn generate_embedding(
        &self,
        params: GenerateEmbeddingParams,
    ) -> Result<GenerateEmbeddingResponse> {
        let record = match self
            .client
            .generate_embedding(&params.text, params.model.as_deref())
            .await
        {
            Ok(record) => record,
            Err(e) => {
                error!("Failed to generate embedding: {e}");
                return Err(e);
            }
        };

        info!(
            "Embedding ready: model {}, {} dimensions",
            record.model(),
            record.dimension()
        );

        Ok(GenerateEmbeddingResponse {
            record: record.encode()?,
        })
    }

    /// Recover a stored record for display. Never fails.
    pub fn format_record(&self, params: FormatRecordParams) -> EmbeddingRecord {
        format_record(params.record.as_deref())
    }

    /// Cosine similarity between two equal-length vectors.
    pub fn cosine_similarity(&self, params: SimilarityParams) -> Result<SimilarityResponse> {
        let similarity = cosine_similarity(&params.a, &params.b)?;
        Ok(SimilarityResponse { similarity })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use embedcell_embeddings::{ClientConfig, EmbeddingError, FetchRequest, FetchResponse, Fetcher};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use std::sync::Arc;

    struct StaticFetcher(FetchResponse);

    #[async_trait]
    impl Fetcher for StaticFetcher {
        async fn post_json(&self, _request: FetchRequest) -> Result<FetchResponse> {
            Ok(self.0.clone())
        }
    }

    fn handler(status: u16, body: Value) -> EmbeddingHandler {
        let fetcher = Arc::new(StaticFetcher(FetchResponse::new(status, body)));
        EmbeddingHandler::new(EmbeddingClient::new(ClientConfig::default(), fetcher))
    }

    #[tokio::test]
    async fn test_generate_then_format() {
        let handler = handler(
            200,
            json!({
                "data": [{"index": 0, "embedding": [0.1, 0.2, 0.3]}],
                "model": "text-embedding-3-small",
                "usage": {"prompt_tokens": 2, "total_tokens": 2}
            }),
        );

        let response = handler
            .generate_embedding(GenerateEmbeddingParams {
                text: "hello world".to_string(),
                model: Some("text-embedding-3-small".to_string()),
            })
            .await
            .unwrap();

        let stored: Value = serde_json::from_str(&response.record).unwrap();
        assert_eq!(
            stored,
            json!({
                "id": "0",
                "input": "hello world",
                "embedding": [0.1, 0.2, 0.3],
                "formatted": "Embedding Object",
                "model": "text-embedding-3-small",
                "prompt_tokens": 2,
                "total_tokens": 2
            })
        );

        let record = handler.format_record(FormatRecordParams {
            record: Some(response.record),
        });
        assert_eq!(record.input(), "hello world");
        assert_eq!(record.embedding(), &[0.1, 0.2, 0.3]);
    }

    #[tokio::test]
    async fn test_generate_surfaces_provider_error() {
        let handler = handler(401, json!({"error": {"message": "invalid key"}}));

        let err = handler
            .generate_embedding(GenerateEmbeddingParams {
                text: "hello world".to_string(),
                model: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, EmbeddingError::Provider(ref m) if m == "invalid key"));
    }

    #[test]
    fn test_format_without_record() {
        let record = handler(200, Value::Null).format_record(FormatRecordParams::default());
        assert_eq!(record, EmbeddingRecord::empty());
    }

    #[test]
    fn test_similarity() {
        let handler = handler(200, Value::Null);

        let orthogonal = handler
            .cosine_similarity(SimilarityParams {
                a: vec![1.0, 0.0],
                b: vec![0.0, 1.0],
            })
            .unwrap();
        assert_eq!(orthogonal.similarity, 0.0);

        let err = handler
            .cosine_similarity(SimilarityParams {
                a: vec![1.0],
                b: vec![1.0, 2.0],
            })
            .unwrap_err();
        assert!(matches!(err, EmbeddingError::InvalidArgument(_)));
    }
}
