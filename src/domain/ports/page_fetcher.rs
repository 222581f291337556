use crate::domain::error::FeedError;
use async_trait::async_trait;

/// Retrieves the visible text of a web page.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// `Ok(None)` when the site answered but refused to serve the page.
    async fn fetch_text(&self, url: &str) -> Result<Option<String>, FeedError>;
}
