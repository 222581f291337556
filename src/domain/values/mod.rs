pub mod market_catalog;
pub mod resolved_query;
pub mod sentiment;
