pub mod article_store;
pub mod embedding_port;
pub mod language_model;
pub mod news_source;
pub mod page_fetcher;
pub mod quote_source;
pub mod sentiment_scorer;
pub mod symbol_search;
