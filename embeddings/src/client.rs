//! Embedding generation against an OpenAI-compatible provider.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::{EmbeddingError, Result};
use crate::fetch::{FetchRequest, Fetcher};
use crate::record::EmbeddingRecord;

const GENERIC_FAILURE: &str = "failed to generate embedding";
const NO_EMBEDDING: &str = "no embedding returned";

/// Requests a single embedding per call and packages it as a record.
///
/// The client holds no mutable state; concurrent calls are independent and
/// share only the injected fetcher.
#[derive(Clone)]
pub struct EmbeddingClient {
    config: ClientConfig,
    fetcher: Arc<dyn Fetcher>,
}

impl EmbeddingClient {
    /// Create a client that sends requests through `fetcher`.
    pub fn new(config: ClientConfig, fetcher: Arc<dyn Fetcher>) -> Self {
        Self { config, fetcher }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Generate an embedding for `text`.
    ///
    /// `model` falls back to the configured default when absent or empty. The
    /// returned record carries the model name reported by the provider, which
    /// may differ from the one requested. Exactly one request is made; failures
    /// are not retried.
    pub async fn generate_embedding(
        &self,
        text: &str,
        model: Option<&str>,
    ) -> Result<EmbeddingRecord> {
        if text.is_empty() {
            return Err(EmbeddingError::InvalidArgument(
                "text to embed must not be empty".to_string(),
            ));
        }

        let model = model
            .filter(|m| !m.is_empty())
            .unwrap_or(self.config.default_model.as_str());

        debug!("Generating embedding with model: {model}");

        let body = serde_json::json!({
            "input": text,
            "model": model
        });
        let request = FetchRequest::new(self.config.embeddings_url(), body)
            .with_header("Content-Type", "application/json");

        let response = self.fetcher.post_json(request).await?;

        if response.status != 200 {
            let message = provider_error_message(&response.body);
            warn!(
                "Embedding request failed with status {}: {message}",
                response.status
            );
            return Err(EmbeddingError::Provider(message));
        }

        let body = response.body;

        // An empty result list wins over any other oddity in the body.
        let first = match body.get("data") {
            None | Some(Value::Null) => None,
            Some(Value::Array(items)) => items.first().cloned(),
            Some(_) => {
                return Err(EmbeddingError::InvalidResponse(
                    "`data` is not a list".to_string(),
                ));
            }
        }
        .ok_or_else(|| EmbeddingError::Provider(NO_EMBEDDING.to_string()))?;

        let first: ProviderEmbeddingData = serde_json::from_value(first)
            .map_err(|e| EmbeddingError::InvalidResponse(e.to_string()))?;

        let model = body.get("model").and_then(Value::as_str).unwrap_or_default();
        let usage = body
            .get("usage")
            .cloned()
            .and_then(|usage| serde_json::from_value::<ProviderUsage>(usage).ok())
            .unwrap_or_default();

        let record = EmbeddingRecord::new(
            first.index.to_string(),
            text,
            first.embedding,
            model,
        )
        .with_usage(
            usage.prompt_tokens.unwrap_or_default(),
            usage.total_tokens.unwrap_or_default(),
        );

        info!(
            "Generated embedding with {} dimensions ({} tokens)",
            record.dimension(),
            record.total_tokens()
        );

        Ok(record)
    }
}

fn provider_error_message(body: &Value) -> String {
    body.get("error")
        .and_then(|error| error.get("message"))
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .unwrap_or(GENERIC_FAILURE)
        .to_string()
}

/// One entry of the provider's `data` list.
#[derive(Debug, Deserialize)]
struct ProviderEmbeddingData {
    #[serde(default)]
    index: u64,
    embedding: Vec<f64>,
}

/// Token accounting; absent or null counts are zero.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProviderUsage {
    prompt_tokens: Option<u64>,
    total_tokens: Option<u64>,
}
