pub mod embeddings;
pub mod feeds;
pub mod llm;
pub mod sentiment;
pub mod sqlite;
pub mod web;
