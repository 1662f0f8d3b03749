//! # Embeddings
//!
//! This crate requests text embeddings from an OpenAI-compatible provider,
//! packages each result as a self-describing record, recovers stored records
//! for display and scores vectors by cosine similarity.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        embedcell core                           │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  EmbeddingClient ──► EmbeddingRecord ──► transport string       │
//! │       │                                        │                │
//! │       ▼                                        ▼                │
//! │  Fetcher (injected)                     format_record           │
//! │                                                                 │
//! │  cosine_similarity (independent)                                │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use embedcell_embeddings::{ClientConfig, EmbeddingClient, ReqwestFetcher, format_record};
//!
//! let fetcher = ReqwestFetcher::new().with_api_key(api_key);
//! let client = EmbeddingClient::new(ClientConfig::from_env(), Arc::new(fetcher));
//!
//! let stored = client.generate_embedding("hello world", None).await?.encode()?;
//! let record = format_record(Some(&stored));
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod format;
pub mod record;
pub mod similarity;

pub use client::EmbeddingClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use error::{EmbeddingError, Result};
pub use fetch::{FetchRequest, FetchResponse, Fetcher, ReqwestFetcher};
pub use format::format_record;
pub use record::{EmbeddingRecord, RecordParse};
pub use similarity::cosine_similarity;

/// A dense vector embedding.
pub type Embedding = Vec<f64>;
