use axum::{extract::State, Json};
use std::sync::Arc;

use super::dto::*;
use super::error::ApiError;
use crate::application::analyze_document::DocumentAnalysis;
use crate::application::ingest::IngestOutcome;
use crate::application::market_data::{MarketSummary, TickerEntry};
use crate::application::rank_news::split_terms;
use crate::application::resolve_and_fetch::Dashboard;
use crate::NewsDesk;

type Desk = State<Arc<NewsDesk>>;

/// GET / - liveness
pub async fn home(State(desk): Desk) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "System Online",
        backend: desk.model_name().to_string(),
    })
}

pub async fn market_summary(State(desk): Desk) -> Json<MarketSummary> {
    Json(desk.market_summary().await)
}

pub async fn market_ticker(State(desk): Desk) -> Json<Vec<TickerEntry>> {
    Json(desk.market_ticker().await)
}

/// POST /resolve_and_fetch - classify the query and attach quotes
pub async fn resolve_and_fetch(
    State(desk): Desk,
    Json(req): Json<QueryRequest>,
) -> Result<Json<Dashboard>, ApiError> {
    Ok(Json(desk.resolve_and_fetch(&req.query).await?))
}

/// POST /ingest_news - ranked news for a comma separated term list
pub async fn ingest_news(
    State(desk): Desk,
    Json(req): Json<QueryRequest>,
) -> Result<Json<ArticlesResponse>, ApiError> {
    let terms = split_terms(&req.query);
    let articles = desk.fetch_news(&terms).await?;
    Ok(Json(ArticlesResponse { articles }))
}

/// POST /ingest - run one article through the pipeline
pub async fn ingest(
    State(desk): Desk,
    Json(req): Json<IngestRequest>,
) -> Result<Json<IngestOutcome>, ApiError> {
    Ok(Json(desk.ingest(&req.text).await?))
}

/// POST /search - stored articles close to the query
pub async fn search(
    State(desk): Desk,
    Json(req): Json<QueryRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let results = desk.search(&req.query).await?;
    Ok(Json(SearchResponse { results }))
}

pub async fn analyze(
    State(desk): Desk,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<DocumentAnalysis>, ApiError> {
    let analysis = match (req.url.as_deref(), req.text.as_deref()) {
        (Some(url), _) if !url.trim().is_empty() => desk.analyze_url(url).await?,
        (_, Some(text)) => desk.analyze_text(text).await,
        _ => return Err(ApiError::BadRequest("either text or url is required".into())),
    };
    Ok(Json(analysis))
}
