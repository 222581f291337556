pub mod analyze_document;
pub mod extract_entities;
pub mod fallback;
pub mod ingest;
pub mod market_data;
pub mod rank_news;
pub mod resolve_and_fetch;
pub mod resolve_query;
pub mod search;
pub mod similarity_gate;
pub mod store_article;
