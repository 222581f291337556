use crate::domain::entities::news_item::RawNewsItem;
use crate::domain::error::FeedError;
use async_trait::async_trait;

/// Search-backed news provider. Results are presumed most recent first.
#[async_trait]
pub trait NewsSource: Send + Sync {
    fn name(&self) -> &str;

    async fn search(&self, term: &str) -> Result<Vec<RawNewsItem>, FeedError>;
}
