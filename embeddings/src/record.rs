//! Embedding records and their transport encoding.
//!
//! A record bundles one embedding vector with the text it was computed from,
//! the model that produced it and the provider's token accounting. Records
//! travel as JSON strings between generation and display.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::Embedding;
use crate::error::Result;

/// Label carried by records produced from a provider response.
pub const GENERATED_LABEL: &str = "Embedding Object";

/// Label of the sentinel returned when there is no stored record.
pub const EMPTY_LABEL: &str = "No data";

/// Label of the sentinel returned when the stored record cannot be decoded.
pub const INVALID_LABEL: &str = "Invalid embedding record JSON";

/// One completed embedding computation plus its provenance.
///
/// Fields missing from a decoded document take their zero value, so a
/// partially populated record decodes instead of being rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingRecord {
    id: String,
    input: String,
    embedding: Embedding,
    formatted: String,
    model: String,
    prompt_tokens: u64,
    total_tokens: u64,
}

impl EmbeddingRecord {
    /// Create a record for a freshly generated embedding.
    pub fn new(
        id: impl Into<String>,
        input: impl Into<String>,
        embedding: Embedding,
        model: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            input: input.into(),
            embedding,
            formatted: GENERATED_LABEL.to_string(),
            model: model.into(),
            prompt_tokens: 0,
            total_tokens: 0,
        }
    }

    /// Set the provider's token usage.
    pub fn with_usage(mut self, prompt_tokens: u64, total_tokens: u64) -> Self {
        self.prompt_tokens = prompt_tokens;
        self.total_tokens = total_tokens;
        self
    }

    /// Sentinel for "nothing stored yet".
    pub fn empty() -> Self {
        Self::sentinel(EMPTY_LABEL)
    }

    /// Sentinel for a stored value that could not be decoded.
    pub fn invalid() -> Self {
        Self::sentinel(INVALID_LABEL)
    }

    fn sentinel(label: &str) -> Self {
        Self {
            formatted: label.to_string(),
            ..Self::default()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn embedding(&self) -> &[f64] {
        &self.embedding
    }

    /// Human-readable label fixed when the record was created.
    pub fn formatted(&self) -> &str {
        &self.formatted
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn prompt_tokens(&self) -> u64 {
        self.prompt_tokens
    }

    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    /// Dimension of the stored vector.
    pub fn dimension(&self) -> usize {
        self.embedding.len()
    }

    /// Encode the record as its transport string.
    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a transport string, keeping track of why decoding failed.
    pub fn parse(text: Option<&str>) -> RecordParse {
        let text = match text {
            None | Some("") => return RecordParse::EmptyInput,
            Some(text) => text,
        };

        // Derived struct visitors also accept sequences, so only objects
        // are handed to serde.
        let value = match serde_json::from_str::<Value>(text) {
            Ok(value @ Value::Object(_)) => value,
            Ok(_) => return RecordParse::ParseError("expected a JSON object".to_string()),
            Err(e) => return RecordParse::ParseError(e.to_string()),
        };

        match serde_json::from_value::<Self>(value) {
            Ok(record) => RecordParse::Parsed(record),
            Err(e) => RecordParse::ParseError(e.to_string()),
        }
    }

    /// Decode a transport string, degrading to a sentinel record on empty or
    /// malformed input. Never fails.
    pub fn decode(text: Option<&str>) -> Self {
        Self::parse(text).into_record()
    }
}

/// Outcome of decoding a transport string.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordParse {
    /// The text decoded into a record.
    Parsed(EmbeddingRecord),
    /// No text was supplied.
    EmptyInput,
    /// The text is not a well-formed record.
    ParseError(String),
}

impl RecordParse {
    /// Collapse into the record shown to the user.
    pub fn into_record(self) -> EmbeddingRecord {
        match self {
            Self::Parsed(record) => record,
            Self::EmptyInput => EmbeddingRecord::empty(),
            Self::ParseError(message) => {
                warn!("Discarding malformed embedding record: {message}");
                EmbeddingRecord::invalid()
            }
        }
    }
}
