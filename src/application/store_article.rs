use crate::domain::entities::article::Entities;
use crate::domain::error::DomainError;
use crate::domain::ports::article_store::ArticleStore;
use std::sync::Arc;

/// Appends an article with its flattened entity metadata. No dedup here;
/// the similarity gate runs first.
pub struct ArticleWriter {
    store: Arc<dyn ArticleStore>,
}

impl ArticleWriter {
    pub fn new(store: Arc<dyn ArticleStore>) -> Self {
        Self { store }
    }

    pub async fn write(&self, text: &str, entities: &Entities) -> Result<(), DomainError> {
        self.store
            .add(&[text.to_string()], &[entities.to_metadata()])
            .await?;
        tracing::info!("article stored with metadata");
        Ok(())
    }
}
