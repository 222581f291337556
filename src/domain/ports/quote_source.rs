use crate::domain::entities::market_quote::QuoteSnapshot;
use crate::domain::error::FeedError;
use async_trait::async_trait;

/// Live market-quote provider.
///
/// `Ok(None)` means the source answered but has no data for the symbol;
/// `Err` means the source itself could not be reached or understood.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    fn name(&self) -> &str;

    async fn quote(&self, symbol: &str) -> Result<Option<QuoteSnapshot>, FeedError>;
}
