//! Resolve a dashboard query and attach the market data it needs.

use crate::application::market_data::MarketDataService;
use crate::application::resolve_query::QueryResolver;
use crate::domain::entities::market_quote::MarketQuote;
use crate::domain::values::resolved_query::{ResolvedQuery, SearchTerms};
use serde::Serialize;
use std::sync::Arc;

pub const NOT_FOUND_MESSAGE: &str = "Data not found";

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Dashboard {
    Commodity {
        title: String,
        stocks: Vec<MarketQuote>,
        search_terms: SearchTerms,
    },
    GridView {
        title: String,
        stocks: Vec<MarketQuote>,
        search_terms: SearchTerms,
    },
    Stock {
        data: MarketQuote,
        search_terms: SearchTerms,
    },
    Error {
        message: String,
    },
}

pub struct DashboardComposer {
    resolver: Arc<QueryResolver>,
    market: Arc<MarketDataService>,
}

impl DashboardComposer {
    pub fn new(resolver: Arc<QueryResolver>, market: Arc<MarketDataService>) -> Self {
        Self { resolver, market }
    }

    pub async fn compose(&self, query: &str) -> Dashboard {
        match self.resolver.resolve(query).await {
            ResolvedQuery::CommodityMarket { name, search_terms } => Dashboard::Commodity {
                title: name,
                stocks: self.market.commodity_snapshot().await,
                search_terms,
            },
            ResolvedQuery::Sector {
                name,
                symbols,
                search_terms,
            }
            | ResolvedQuery::Group {
                name,
                symbols,
                search_terms,
            } => Dashboard::GridView {
                title: name,
                stocks: self.basket(&symbols).await,
                search_terms,
            },
            ResolvedQuery::Stock {
                symbol,
                search_terms,
                note,
            } => match self.market.quote(&symbol).await {
                Some(mut data) => {
                    if let Some(note) = note {
                        data.add_note(&note);
                    }
                    Dashboard::Stock { data, search_terms }
                }
                None => {
                    tracing::info!(%symbol, "no market data for symbol");
                    Dashboard::Error {
                        message: NOT_FOUND_MESSAGE.to_string(),
                    }
                }
            },
        }
    }

    // one symbol at a time; symbols without data are left out
    async fn basket(&self, symbols: &[String]) -> Vec<MarketQuote> {
        let mut stocks = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            if let Some(q) = self.market.quote(symbol).await {
                stocks.push(q);
            }
        }
        stocks
    }
}
