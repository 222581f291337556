pub mod article;
pub mod market_quote;
pub mod news_item;
