use crate::domain::entities::article::RecordMetadata;
use crate::domain::error::DomainError;
use crate::domain::ports::article_store::ArticleStore;
use serde::Serialize;
use std::sync::Arc;

/// Looser than the duplicate threshold; anything at or above is noise.
pub const SEARCH_RELEVANCE_THRESHOLD: f64 = 1.4;
pub const SEARCH_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub content: String,
    pub metadata: RecordMetadata,
    pub score: f64,
}

pub struct SearchUseCase {
    store: Arc<dyn ArticleStore>,
}

impl SearchUseCase {
    pub fn new(store: Arc<dyn ArticleStore>) -> Self {
        Self { store }
    }

    pub async fn search(&self, query: &str) -> Result<Vec<SearchHit>, DomainError> {
        tracing::info!(%query, "searching stored articles");
        let results = self.store.query(query, SEARCH_LIMIT).await?;

        let mut hits = Vec::new();
        for r in results {
            if r.distance < SEARCH_RELEVANCE_THRESHOLD {
                hits.push(SearchHit {
                    content: r.record.content,
                    metadata: r.record.metadata,
                    score: r.distance,
                });
            } else {
                tracing::debug!(score = r.distance, "filtered out low relevance result");
            }
        }
        Ok(hits)
    }
}
