use crate::domain::entities::article::{RecordMetadata, ScoredRecord};
use crate::domain::error::DomainError;
use async_trait::async_trait;

/// Embedding-backed nearest-neighbor store for articles.
///
/// Distances are "lower is closer"; an identical text scores 0.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Append one record per text. `metadata` is parallel to `texts`.
    async fn add(&self, texts: &[String], metadata: &[RecordMetadata]) -> Result<(), DomainError>;

    /// The `k` closest records to `text`, closest first.
    async fn query(&self, text: &str, k: usize) -> Result<Vec<ScoredRecord>, DomainError>;

    /// Flush and release the store at shutdown.
    fn close(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
