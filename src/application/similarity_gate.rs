use crate::domain::error::DomainError;
use crate::domain::ports::article_store::ArticleStore;
use std::sync::Arc;

/// Distance below which a new article counts as a near-duplicate.
pub const DUPLICATE_THRESHOLD: f64 = 1.1;

#[derive(Debug, Clone, PartialEq)]
pub struct GateVerdict {
    pub is_duplicate: bool,
    /// Distance to the nearest stored article, if the store had any.
    pub nearest_distance: Option<f64>,
}

pub struct SimilarityGate {
    store: Arc<dyn ArticleStore>,
    threshold: f64,
}

impl SimilarityGate {
    pub fn new(store: Arc<dyn ArticleStore>) -> Self {
        Self {
            store,
            threshold: DUPLICATE_THRESHOLD,
        }
    }

    pub async fn check(&self, text: &str) -> Result<GateVerdict, DomainError> {
        let nearest = self.store.query(text, 1).await?;
        let nearest_distance = nearest.first().map(|r| r.distance);
        let is_duplicate = nearest_distance.is_some_and(|d| d < self.threshold);
        if let (true, Some(d)) = (is_duplicate, nearest_distance) {
            tracing::info!(distance = d, "duplicate detected");
        }
        Ok(GateVerdict {
            is_duplicate,
            nearest_distance,
        })
    }
}
