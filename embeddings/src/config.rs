//! Configuration for the embedding client.

/// Provider base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Model requested when the caller does not name one.
pub const DEFAULT_MODEL: &str = "text-embedding-3-small";

/// Configuration for [`crate::EmbeddingClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL; requests go to `{base_url}/embeddings`.
    pub base_url: String,

    /// Model to use when a request does not specify one.
    pub default_model: String,

    /// Request timeout for the HTTP fetcher (None = no timeout).
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
            timeout_secs: None,
        }
    }

    /// Load overrides from `EMBEDCELL_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load overrides through `lookup`. Blank values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut config = Self::new();
        if let Some(url) = get("EMBEDCELL_BASE_URL") {
            config = config.with_base_url(url);
        }
        if let Some(model) = get("EMBEDCELL_MODEL") {
            config = config.with_default_model(model);
        }
        if let Some(secs) = get("EMBEDCELL_TIMEOUT_SECS").and_then(|s| s.trim().parse().ok()) {
            config = config.with_timeout_secs(secs);
        }
        config
    }

    /// Set the base URL. A trailing slash is dropped.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the default model.
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Full URL of the embeddings endpoint.
    pub fn embeddings_url(&self) -> String {
        format!("{}/embeddings", self.base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.default_model, "text-embedding-3-small");
        assert_eq!(config.embeddings_url(), "https://api.openai.com/v1/embeddings");
        assert_eq!(config.timeout_secs, None);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("EMBEDCELL_BASE_URL", "http://localhost:8080/v1/"),
            ("EMBEDCELL_MODEL", "text-embedding-3-large"),
            ("EMBEDCELL_TIMEOUT_SECS", "30"),
        ]);
        let config = ClientConfig::from_lookup(|key| vars.get(key).map(|v| (*v).to_string()));

        assert_eq!(config.embeddings_url(), "http://localhost:8080/v1/embeddings");
        assert_eq!(config.default_model, "text-embedding-3-large");
        assert_eq!(config.timeout_secs, Some(30));
    }

    #[test]
    fn test_from_lookup_ignores_blank_and_bad_values() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("EMBEDCELL_MODEL", "  "),
            ("EMBEDCELL_TIMEOUT_SECS", "soon"),
        ]);
        let config = ClientConfig::from_lookup(|key| vars.get(key).map(|v| (*v).to_string()));

        assert_eq!(config, ClientConfig::default());
    }
}
