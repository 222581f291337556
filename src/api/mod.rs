mod dto;
mod error;
mod handlers;

pub use error::ApiError;

use crate::NewsDesk;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Build the dashboard router around a shared news desk.
pub fn router(desk: Arc<NewsDesk>) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/market_summary", get(handlers::market_summary))
        .route("/market_ticker", get(handlers::market_ticker))
        .route("/resolve_and_fetch", post(handlers::resolve_and_fetch))
        .route("/ingest_news", post(handlers::ingest_news))
        .route("/ingest", post(handlers::ingest))
        .route("/search", post(handlers::search))
        .route("/analyze", post(handlers::analyze))
        .layer(CorsLayer::permissive())
        .with_state(desk)
}
