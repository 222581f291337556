//! Process configuration, read once from `NEWSDESK_*` environment variables.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum EmbeddingBackend {
    Hashing,
    OpenAi,
    Ollama,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: String,
    pub bind: String,
    pub embedding_backend: EmbeddingBackend,
    pub embedding_api_key: String,
    pub embedding_model: Option<String>,
    pub ollama_url: String,
    pub llm_model: String,
    pub news_api_key: Option<String>,
    pub news_language: String,
    pub symbol_search_timeout: Duration,
    pub market_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: "./newsdesk.db".into(),
            bind: "0.0.0.0:8002".into(),
            embedding_backend: EmbeddingBackend::Hashing,
            embedding_api_key: String::new(),
            embedding_model: None,
            ollama_url: "http://localhost:11434".into(),
            llm_model: "llama3.2".into(),
            news_api_key: None,
            news_language: "en".into(),
            symbol_search_timeout: Duration::from_millis(3000),
            market_timeout: Duration::from_secs(10),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparsable values keep defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();
        let millis = |key: &str| get(key).and_then(|v| v.parse::<u64>().ok());

        let embedding_backend = match get("NEWSDESK_EMBEDDING_PROVIDER").as_deref() {
            Some("openai") => EmbeddingBackend::OpenAi,
            Some("ollama") => EmbeddingBackend::Ollama,
            Some("hashing") | None => EmbeddingBackend::Hashing,
            Some(other) => {
                tracing::warn!(provider = other, "unknown embedding provider, using hashing");
                EmbeddingBackend::Hashing
            }
        };

        Self {
            db_path: get("NEWSDESK_DB").unwrap_or(d.db_path),
            bind: get("NEWSDESK_BIND").unwrap_or(d.bind),
            embedding_backend,
            embedding_api_key: get("NEWSDESK_EMBEDDING_API_KEY").unwrap_or_default(),
            embedding_model: get("NEWSDESK_EMBEDDING_MODEL"),
            ollama_url: get("NEWSDESK_OLLAMA_URL").unwrap_or(d.ollama_url),
            llm_model: get("NEWSDESK_LLM_MODEL").unwrap_or(d.llm_model),
            news_api_key: get("NEWSDESK_NEWS_API_KEY").filter(|k| !k.is_empty()),
            news_language: get("NEWSDESK_NEWS_LANGUAGE").unwrap_or(d.news_language),
            symbol_search_timeout: millis("NEWSDESK_SYMBOL_SEARCH_TIMEOUT_MS")
                .map(Duration::from_millis)
                .unwrap_or(d.symbol_search_timeout),
            market_timeout: millis("NEWSDESK_MARKET_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(d.market_timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let cfg = Config::from_lookup(lookup(&[]));
        assert_eq!(cfg.bind, "0.0.0.0:8002");
        assert_eq!(cfg.embedding_backend, EmbeddingBackend::Hashing);
        assert_eq!(cfg.symbol_search_timeout, Duration::from_secs(3));
        assert!(cfg.news_api_key.is_none());
    }

    #[test]
    fn test_overrides() {
        let cfg = Config::from_lookup(lookup(&[
            ("NEWSDESK_DB", ":memory:"),
            ("NEWSDESK_EMBEDDING_PROVIDER", "ollama"),
            ("NEWSDESK_SYMBOL_SEARCH_TIMEOUT_MS", "500"),
            ("NEWSDESK_MARKET_TIMEOUT_SECS", "nope"),
            ("NEWSDESK_NEWS_API_KEY", ""),
        ]));
        assert_eq!(cfg.db_path, ":memory:");
        assert_eq!(cfg.embedding_backend, EmbeddingBackend::Ollama);
        assert_eq!(cfg.symbol_search_timeout, Duration::from_millis(500));
        assert_eq!(cfg.market_timeout, Duration::from_secs(10));
        assert!(cfg.news_api_key.is_none());
    }
}
