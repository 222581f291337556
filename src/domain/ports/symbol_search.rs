use crate::domain::error::FeedError;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq)]
pub struct SymbolMatch {
    pub symbol: String,
    pub name: Option<String>,
}

/// Free-text to ticker lookup.
#[async_trait]
pub trait SymbolSearch: Send + Sync {
    async fn lookup(&self, query: &str) -> Result<Option<SymbolMatch>, FeedError>;
}
