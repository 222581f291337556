pub mod article_store;
pub mod migrations;
