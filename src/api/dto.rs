use crate::application::search::SearchHit;
use crate::domain::entities::news_item::NewsItem;
use serde::{Deserialize, Serialize};

/// Body shared by the query-driven endpoints.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

/// POST /ingest request
#[derive(Debug, Deserialize)]
pub struct IngestRequest {
    pub text: String,
}

/// POST /analyze request; `url` wins when both are given.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub backend: String,
}

#[derive(Debug, Serialize)]
pub struct ArticlesResponse {
    pub articles: Vec<NewsItem>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
}
