//! Command-line host for the embedding entry points.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use embedcell_embeddings::{ClientConfig, EmbeddingClient, ReqwestFetcher};

use crate::handler::EmbeddingHandler;
use crate::protocol::{FormatRecordParams, GenerateEmbeddingParams, SimilarityParams};

/// Generate, display and compare text embeddings.
#[derive(Debug, Parser)]
#[command(name = "embedcell", version)]
pub struct Cli {
    /// Provider API base URL (overrides EMBEDCELL_BASE_URL).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (overrides EMBEDCELL_TIMEOUT_SECS).
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Embed TEXT and print the stored record.
    Generate {
        text: String,

        /// Provider model (defaults to EMBEDCELL_MODEL or text-embedding-3-small).
        #[arg(long)]
        model: Option<String>,
    },

    /// Print a stored record as display JSON.
    Format {
        /// Stored record; omit when nothing has been stored.
        record: Option<String>,
    },

    /// Print the cosine similarity of two comma-separated vectors.
    Similarity {
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        a: Vec<f64>,

        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        b: Vec<f64>,
    },
}

impl Cli {
    /// Resolve the client configuration: environment first, flags on top.
    pub fn client_config(&self, base: ClientConfig) -> ClientConfig {
        let mut config = base;
        if let Some(url) = &self.base_url {
            config = config.with_base_url(url.as_str());
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout_secs(secs);
        }
        config
    }
}

/// Build a handler backed by a real HTTP fetcher.
pub fn build_handler(config: ClientConfig, api_key: Option<String>) -> Result<EmbeddingHandler> {
    let mut fetcher = match config.timeout_secs {
        Some(secs) => ReqwestFetcher::new_with_timeout(Duration::from_secs(secs))
            .context("failed to build HTTP client")?,
        None => ReqwestFetcher::new(),
    };
    if let Some(key) = api_key.filter(|k| !k.is_empty()) {
        fetcher = fetcher.with_api_key(key);
    }

    Ok(EmbeddingHandler::new(EmbeddingClient::new(
        config,
        Arc::new(fetcher),
    )))
}

/// Run one command and return what should be printed.
pub async fn run(handler: &EmbeddingHandler, command: Command) -> Result<String> {
    match command {
        Command::Generate { text, model } => {
            let response = handler
                .generate_embedding(GenerateEmbeddingParams { text, model })
                .await
                .context("embedding generation failed")?;
            Ok(response.record)
        }
        Command::Format { record } => {
            let record = handler.format_record(FormatRecordParams { record });
            Ok(serde_json::to_string_pretty(&record)?)
        }
        Command::Similarity { a, b } => {
            let response = handler
                .cosine_similarity(SimilarityParams { a, b })
                .context("similarity failed")?;
            Ok(response.similarity.to_string())
        }
    }
}
