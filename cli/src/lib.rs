//! # embedcell CLI
//!
//! Host-facing entry points for the embeddings core, plus the command-line
//! front end that wires them to a real HTTP fetcher.

pub mod cli;
pub mod handler;
pub mod protocol;

pub use cli::{Cli, Command, build_handler, run};
pub use handler::EmbeddingHandler;
pub use protocol::{
    FormatRecordParams, GenerateEmbeddingParams, GenerateEmbeddingResponse, SimilarityParams,
    SimilarityResponse,
};
